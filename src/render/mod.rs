//! PDF rendering for invoices.
//!
//! The renderer maps issuer/customer/invoice data plus the calculator's
//! outputs onto a fixed A4 layout:
//! - `fonts` - startup loading of the regular/bold typeface pair
//! - `canvas` - low-level positioned text cells over `printpdf`
//! - `layout` - the invoice template itself (header, table, totals,
//!   recapitulation, signature)
//! - `common` - date formatting and filename derivation helpers

pub mod canvas;
pub mod common;
pub mod fonts;
pub mod layout;

pub use fonts::{FontError, FontSet};
pub use layout::{generate_invoice, render_invoice};

use thiserror::Error;

/// Errors that can occur while rendering an invoice PDF.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to embed font into PDF: {0}")]
    EmbedFont(#[source] printpdf::Error),
    #[error("failed to serialize PDF document: {0}")]
    Serialize(#[source] printpdf::Error),
}

/// Result of a successful invoice render.
#[derive(Debug)]
pub struct GeneratedInvoice {
    pub filename: String,
    pub pdf: Vec<u8>,
}
