//! Field-level validation of the invoice payload.
//!
//! Shape errors (wrong types, missing members) are already rejected by the
//! JSON extractor; this layer only checks that required text fields carry
//! content, and reports every failure at once so the client can fix the
//! whole payload in one round trip. Unusual numeric values (negative price,
//! discount above 100) are deliberately not rejected - the calculator
//! propagates them as-is.

use serde::Serialize;
use utoipa::ToSchema;

use super::models::InvoiceRequest;

/// One field that failed validation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationError {
    #[schema(example = "customer.name")]
    pub field: String,
    #[schema(example = "must not be empty")]
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn empty_field(field: &str) -> Self {
        Self::new(field, "must not be empty")
    }
}

/// Collector for validation failures across the whole payload.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

fn require(value: &str, field: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field));
    }
}

/// Validate an invoice request, returning every failing field.
pub fn validate_request(req: &InvoiceRequest) -> Result<(), Vec<ValidationError>> {
    let mut errors = ValidationErrors::new();

    require(&req.user.name, "user.name", &mut errors);
    require(&req.user.address, "user.address", &mut errors);
    require(&req.user.tax_number, "user.tax_number", &mut errors);
    require(
        &req.user.registration_number,
        "user.registration_number",
        &mut errors,
    );
    require(&req.user.iban, "user.iban", &mut errors);

    require(&req.customer.name, "customer.name", &mut errors);
    require(&req.customer.address, "customer.address", &mut errors);
    require(&req.customer.tax_number, "customer.tax_number", &mut errors);

    require(
        &req.invoice.invoice_number,
        "invoice.invoice_number",
        &mut errors,
    );

    for (i, service) in req.services.iter().enumerate() {
        if service.name.trim().is_empty() {
            errors.add(ValidationError::empty_field(&format!("services[{i}].name")));
        }
    }

    errors.into_result()
}
