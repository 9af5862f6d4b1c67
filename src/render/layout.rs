//! The fixed invoice template.
//!
//! Positions are absolute millimetre coordinates on A4. The header is drawn
//! by an explicit function that the pagination driver re-invokes whenever
//! the line-item table overflows onto a fresh page; the customer block only
//! appears on the first page, and the signature block is anchored near the
//! bottom of the last page.

use crate::invoice::calculator::{compute, InvoiceTotals, LineComputation};
use crate::invoice::models::{Customer, InvoiceMeta, InvoiceRequest, Issuer};
use crate::policy::{
    MARGIN_LEFT_MM, MARGIN_RIGHT_MM, SIGNATURE_DISCLAIMER, SIGNATURE_NAME, TAX_RATE_PERCENT,
    UNIT_LABEL,
};
use crate::render::canvas::{Align, Canvas};
use crate::render::common::{derive_filename, format_invoice_date, today_display};
use crate::render::fonts::{FontSet, Weight};
use crate::render::{GeneratedInvoice, RenderError};

const LINE_H: f32 = 5.0;
const FONT_SIZE: f32 = 9.0;
const TABLE_TOP_Y: f32 = 110.0;
const SIGNATURE_Y: f32 = 250.0;
/// x position of the rightmost table column ("Skupaj").
const TOTAL_COLUMN_X: f32 = 175.0;

/// Compute, render and name an invoice in one step.
pub fn generate_invoice(
    req: &InvoiceRequest,
    fonts: &FontSet,
) -> Result<GeneratedInvoice, RenderError> {
    let (lines, totals) = compute(&req.services);
    let pdf = render_invoice(req, &lines, &totals, fonts)?;
    let filename = derive_filename(&req.invoice.invoice_number, &req.customer.name);
    Ok(GeneratedInvoice { filename, pdf })
}

/// Render the full invoice document to PDF bytes.
pub fn render_invoice(
    req: &InvoiceRequest,
    lines: &[LineComputation],
    totals: &InvoiceTotals,
    fonts: &FontSet,
) -> Result<Vec<u8>, RenderError> {
    let title = format!("Račun {}", req.invoice.invoice_number);
    let mut canvas = Canvas::new(&title, fonts)?;

    draw_header(&mut canvas, &req.user, &req.invoice);
    draw_customer_block(&mut canvas, &req.customer);

    canvas.set_xy(MARGIN_LEFT_MM, TABLE_TOP_Y);
    draw_table_head(&mut canvas);
    for line in lines {
        if canvas.needs_page_break(LINE_H) {
            canvas.add_page();
            draw_header(&mut canvas, &req.user, &req.invoice);
            canvas.set_xy(MARGIN_LEFT_MM, TABLE_TOP_Y);
            draw_table_head(&mut canvas);
        }
        draw_table_row(&mut canvas, line);
    }

    // The totals, recapitulation and signature belong together; move them
    // to a fresh page when the table ends too close to the bottom.
    if canvas.needs_page_break(LINE_H * 12.0) {
        canvas.add_page();
        draw_header(&mut canvas, &req.user, &req.invoice);
        canvas.set_xy(MARGIN_LEFT_MM, TABLE_TOP_Y);
    }
    draw_totals(&mut canvas, totals);
    draw_recapitulation(&mut canvas, totals);
    draw_signature(&mut canvas);

    canvas.finish()
}

/// Issuer, banking and invoice identification blocks, top-right of every
/// page. Re-invoked by the pagination driver after each page break.
fn draw_header(canvas: &mut Canvas, issuer: &Issuer, invoice: &InvoiceMeta) {
    let (address_line1, address_line2) = split_address(&issuer.address);

    canvas.set_font(Weight::Bold, 8.0);
    canvas.set_xy(120.0, 10.0);
    canvas.cell_ln(LINE_H, "Podatki o izdajatelju:", Align::Right);

    canvas.set_font(Weight::Regular, FONT_SIZE);
    canvas.cell_ln(LINE_H, &issuer.name, Align::Right);
    canvas.cell_ln(LINE_H, address_line1, Align::Right);
    if let Some(second) = address_line2 {
        canvas.cell_ln(LINE_H, second, Align::Right);
    }
    canvas.cell_ln(
        LINE_H,
        &format!("Id. št. za DDV izdajatelja: SI{}", issuer.tax_number),
        Align::Right,
    );
    canvas.cell_ln(
        LINE_H,
        &format!("Matična številka: {}", issuer.registration_number),
        Align::Right,
    );
    canvas.cell_ln(LINE_H, &format!("T: {}", issuer.phone), Align::Right);
    if issuer.tax_payer {
        canvas.cell_ln(LINE_H, "Davčni zavezanec: DA", Align::Right);
    }
    canvas.ln(2.0);

    canvas.set_font(Weight::Bold, 10.0);
    canvas.cell_ln(
        LINE_H,
        &format!("Obvezno plačilo na račun odprt pri {}", issuer.bank),
        Align::Right,
    );
    canvas.cell_ln(LINE_H, &format!("IBAN: {}", issuer.iban), Align::Right);

    canvas.set_xy(120.0, 70.0);
    canvas.set_font(Weight::Bold, 10.0);
    canvas.cell_ln(
        LINE_H,
        &format!("RAČUN št.: {}", invoice.invoice_number),
        Align::Right,
    );
    canvas.set_font(Weight::Regular, FONT_SIZE);
    canvas.cell_ln(
        LINE_H,
        &format!("Datum izdaje: {}", today_display()),
        Align::Right,
    );
    canvas.ln(2.0);
    canvas.cell_ln(
        LINE_H,
        &format!(
            "Datum opravljene storitve: {}",
            format_invoice_date(invoice.issue_date.as_deref())
        ),
        Align::Right,
    );
    canvas.cell_ln(
        LINE_H,
        &format!(
            "Datum zapadlosti računa: {}",
            format_invoice_date(invoice.due_date.as_deref())
        ),
        Align::Right,
    );
}

/// Customer block, first page only.
fn draw_customer_block(canvas: &mut Canvas, customer: &Customer) {
    canvas.set_xy(MARGIN_LEFT_MM, 60.0);
    canvas.set_font(Weight::Bold, 8.0);
    canvas.cell_ln(LINE_H, "Podatki o kupcu:", Align::Left);
    canvas.set_font(Weight::Bold, FONT_SIZE);
    canvas.cell_ln(LINE_H, &customer.name, Align::Left);
    canvas.set_font(Weight::Regular, FONT_SIZE);
    canvas.cell_ln(LINE_H, &customer.address, Align::Left);
    canvas.set_xy(MARGIN_LEFT_MM, 90.0);
    canvas.cell_ln(
        LINE_H,
        &format!("Davčna številka: SI{}", customer.tax_number),
        Align::Left,
    );
}

fn draw_table_head(canvas: &mut Canvas) {
    canvas.set_font(Weight::Regular, FONT_SIZE);
    canvas.cell(50.0, LINE_H, "Naziv storitve", Align::Left);
    canvas.cell(15.0, LINE_H, "Količina", Align::Right);
    canvas.cell(15.0, LINE_H, "Enota", Align::Right);
    canvas.cell(20.0, LINE_H, "Cena (€)", Align::Right);
    canvas.cell(15.0, LINE_H, "Rab. %", Align::Right);
    canvas.cell(25.0, LINE_H, "Davčna osnova", Align::Right);
    canvas.cell(15.0, LINE_H, "DDV %", Align::Right);
    canvas.set_x(TOTAL_COLUMN_X);
    canvas.cell(25.0, LINE_H, "Skupaj (€)", Align::Right);
    canvas.ln(LINE_H);
    canvas.hline(MARGIN_LEFT_MM, MARGIN_RIGHT_MM);
}

fn draw_table_row(canvas: &mut Canvas, line: &LineComputation) {
    canvas.cell(50.0, LINE_H, &line.name, Align::Left);
    canvas.cell(15.0, LINE_H, &line.quantity.to_string(), Align::Right);
    canvas.cell(15.0, LINE_H, UNIT_LABEL, Align::Right);
    canvas.cell(20.0, LINE_H, &format!("{:.2}", line.unit_price), Align::Right);
    canvas.cell(15.0, LINE_H, &format!("{:.2}", line.rabat), Align::Right);
    canvas.cell(25.0, LINE_H, &format!("{:.2}", line.taxable_base), Align::Right);
    canvas.cell(15.0, LINE_H, &format!("{}", line.tax_rate as i64), Align::Right);
    canvas.set_x(TOTAL_COLUMN_X);
    canvas.cell(25.0, LINE_H, &format!("{:.2}", line.line_total), Align::Right);
    canvas.ln(LINE_H);
}

fn draw_totals(canvas: &mut Canvas, totals: &InvoiceTotals) {
    canvas.ln(LINE_H * 2.0);
    canvas.set_font(Weight::Regular, FONT_SIZE);
    canvas.cell_ln(
        LINE_H,
        &format!("Skupaj brez DDV: {:.2} €", totals.taxable_base_sum),
        Align::Right,
    );
    canvas.cell_ln(
        LINE_H,
        &format!("DDV ({}%): {:.2} €", TAX_RATE_PERCENT as i64, totals.tax_sum),
        Align::Right,
    );
    canvas.ln(LINE_H);
    canvas.set_font(Weight::Bold, 12.0);
    canvas.cell_ln(
        LINE_H,
        &format!("Skupaj z DDV za plačilo: {:.2} €", totals.grand_total),
        Align::Right,
    );
    canvas.ln(LINE_H * 2.0);
}

/// One-row VAT summary in fixed-width columns.
fn draw_recapitulation(canvas: &mut Canvas, totals: &InvoiceTotals) {
    canvas.set_font(Weight::Bold, FONT_SIZE);
    canvas.cell_ln(LINE_H, "Rekapitulacija DDV:", Align::Right);
    canvas.set_font(Weight::Regular, FONT_SIZE);
    canvas.cell_ln(LINE_H, &recapitulation_head(), Align::Right);
    canvas.cell_ln(LINE_H, &recapitulation_row(totals), Align::Right);
    canvas.ln(LINE_H * 2.0);
}

pub fn recapitulation_head() -> String {
    format!(
        "{:<18}{:<10}{:<15}{}",
        "DDV osnova", "DDV%", "Znesek DDV", "Skupaj"
    )
}

pub fn recapitulation_row(totals: &InvoiceTotals) -> String {
    format!(
        "{:<20.2}{:<20}{:<10.2}{:.2}",
        totals.taxable_base_sum,
        TAX_RATE_PERCENT as i64,
        totals.tax_sum,
        totals.grand_total
    )
}

fn draw_signature(canvas: &mut Canvas) {
    canvas.set_xy(MARGIN_LEFT_MM, SIGNATURE_Y);
    canvas.set_font(Weight::Regular, FONT_SIZE);
    canvas.cell_ln(LINE_H, SIGNATURE_DISCLAIMER, Align::Right);
    canvas.cell_ln(LINE_H, SIGNATURE_NAME, Align::Right);
}

/// Split the issuer address on the first ", " into its two display lines.
/// An address without the separator stays on one line.
fn split_address(address: &str) -> (&str, Option<&str>) {
    match address.split_once(", ") {
        Some((first, second)) => (first, Some(second)),
        None => (address, None),
    }
}
