//! Invoice domain: payload types, validation, arithmetic and HTTP handlers.

pub mod calculator;
pub mod handlers;
pub mod models;
pub mod validation;

pub use calculator::{compute, InvoiceTotals, LineComputation};
pub use models::{Customer, InvoiceMeta, InvoiceRequest, Issuer, ServiceLine};
pub use validation::{validate_request, ValidationError};
