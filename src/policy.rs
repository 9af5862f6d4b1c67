//! Invoicing policy constants.
//!
//! Everything the layout and the calculator treat as fixed business policy
//! lives here so it can be changed without touching drawing code.

/// VAT rate applied to every line item, in percent.
pub const TAX_RATE_PERCENT: f64 = 22.0;

/// Every service line is billed with this quantity.
pub const FIXED_QUANTITY: u32 = 1;

/// Unit label printed in the "Enota" column.
pub const UNIT_LABEL: &str = "kos";

/// Placeholder printed for absent or unparseable dates.
pub const DATE_PLACEHOLDER: &str = "Ni določeno";

/// Footer disclaimer printed above the signatory line.
pub const SIGNATURE_DISCLAIMER: &str = "Poslujemo brez žiga";

/// Signatory line printed at the bottom of every invoice.
pub const SIGNATURE_NAME: &str = "Franc Potočnik (Podpis)";

// A4 geometry in millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_LEFT_MM: f32 = 10.0;
pub const MARGIN_RIGHT_MM: f32 = 200.0;

/// A table row starting below this y position triggers a page break.
pub const PAGE_BREAK_Y_MM: f32 = 270.0;
