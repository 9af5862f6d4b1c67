use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The invoicing party, printed in the page header.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Issuer {
    #[schema(example = "Janez Novak s.p.")]
    pub name: String,
    /// Two display lines joined by ", " (street, then postcode and city).
    /// An address without the separator renders as a single line.
    #[schema(example = "Slovenska cesta 1, 1000 Ljubljana")]
    pub address: String,
    #[schema(example = "12345678")]
    pub tax_number: String,
    #[schema(example = "1234567000")]
    pub registration_number: String,
    #[schema(example = "+386 40 123 456")]
    pub phone: String,
    /// When true the header carries the "Davčni zavezanec: DA" line.
    pub tax_payer: bool,
    #[schema(example = "NLB d.d.")]
    pub bank: String,
    #[schema(example = "SI56 0201 0001 2345 678")]
    pub iban: String,
}

/// The invoiced party, printed in the customer block on the first page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    #[schema(example = "Podjetje d.o.o.")]
    pub name: String,
    #[schema(example = "Trg republike 3, 1000 Ljubljana")]
    pub address: String,
    #[schema(example = "87654321")]
    pub tax_number: String,
}

/// Invoice identification and dates.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvoiceMeta {
    #[schema(example = "2026-017")]
    pub invoice_number: String,
    /// ISO-8601; absent or unparseable dates render as "Ni določeno".
    #[schema(example = "2026-08-01T00:00:00Z")]
    #[serde(default)]
    pub issue_date: Option<String>,
    #[schema(example = "2026-08-31T00:00:00Z")]
    #[serde(default)]
    pub due_date: Option<String>,
}

/// One billed service. Quantity is fixed policy, not a payload field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceLine {
    #[schema(example = "Svetovanje")]
    pub name: String,
    #[schema(example = 100.0)]
    pub price: f64,
    /// Discount percentage; missing means no discount.
    #[schema(example = 10.0)]
    #[serde(default)]
    pub rabat: Option<f64>,
}

impl ServiceLine {
    pub fn rabat_or_default(&self) -> f64 {
        self.rabat.unwrap_or(0.0)
    }
}

/// The unit of work for one rendering call.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvoiceRequest {
    pub user: Issuer,
    pub customer: Customer,
    pub invoice: InvoiceMeta,
    pub services: Vec<ServiceLine>,
}
