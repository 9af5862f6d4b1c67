//! Pure invoice arithmetic.
//!
//! No I/O and no side effects: given the ordered service lines, produce one
//! computation per line plus the invoice totals. All policy inputs (tax
//! rate, fixed quantity) come from `crate::policy`.

use crate::policy::{FIXED_QUANTITY, TAX_RATE_PERCENT};

use super::models::ServiceLine;

/// Derived figures for one service line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineComputation {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub rabat: f64,
    pub price_sum: f64,
    pub taxable_base: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub line_total: f64,
}

/// Aggregate figures for the whole invoice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceTotals {
    pub taxable_base_sum: f64,
    pub tax_sum: f64,
    pub grand_total: f64,
}

/// Compute per-line figures and invoice totals, in input order.
///
/// The aggregate tax is recomputed from the summed taxable base rather than
/// summed per line. Under the single uniform rate the two are equal; if a
/// second rate is ever introduced the recomputation diverges from the
/// per-line sum and this site has to change.
pub fn compute(services: &[ServiceLine]) -> (Vec<LineComputation>, InvoiceTotals) {
    let mut lines = Vec::with_capacity(services.len());
    let mut taxable_base_sum = 0.0;

    for service in services {
        let price_sum = FIXED_QUANTITY as f64 * service.price;
        let rabat = service.rabat_or_default();
        let taxable_base = price_sum * (1.0 - rabat / 100.0);
        let tax_amount = taxable_base * (TAX_RATE_PERCENT / 100.0);
        let line_total = taxable_base + tax_amount;
        taxable_base_sum += taxable_base;

        lines.push(LineComputation {
            name: service.name.clone(),
            quantity: FIXED_QUANTITY,
            unit_price: service.price,
            rabat,
            price_sum,
            taxable_base,
            tax_rate: TAX_RATE_PERCENT,
            tax_amount,
            line_total,
        });
    }

    let tax_sum = taxable_base_sum * (TAX_RATE_PERCENT / 100.0);
    let totals = InvoiceTotals {
        taxable_base_sum,
        tax_sum,
        grand_total: taxable_base_sum + tax_sum,
    };

    (lines, totals)
}
