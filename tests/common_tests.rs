use racun_server::policy::DATE_PLACEHOLDER;
use racun_server::render::common::{derive_filename, format_invoice_date, today_display};

#[test]
fn test_valid_iso_datetime_formats_as_slovenian_date() {
    assert_eq!(
        format_invoice_date(Some("2024-03-15T00:00:00Z")),
        "15.03.2024"
    );
}

#[test]
fn test_iso_datetime_without_zone_suffix() {
    assert_eq!(
        format_invoice_date(Some("2024-03-15T10:30:00")),
        "15.03.2024"
    );
}

#[test]
fn test_bare_date_is_accepted() {
    assert_eq!(format_invoice_date(Some("2024-12-01")), "01.12.2024");
}

#[test]
fn test_absent_date_renders_placeholder() {
    assert_eq!(format_invoice_date(None), DATE_PLACEHOLDER);
}

#[test]
fn test_unparseable_date_renders_placeholder() {
    assert_eq!(format_invoice_date(Some("not-a-date")), DATE_PLACEHOLDER);
    assert_eq!(format_invoice_date(Some("15.03.2024")), DATE_PLACEHOLDER);
    assert_eq!(format_invoice_date(Some("")), DATE_PLACEHOLDER);
}

#[test]
fn test_today_display_shape() {
    let today = today_display();
    assert_eq!(today.len(), 10);
    assert_eq!(today.matches('.').count(), 2);
}

#[test]
fn test_filename_derivation_example() {
    assert_eq!(
        derive_filename("2024-001", "Acme Corp d.o.o."),
        "Invoice_2024-001_acme-corp-doo.pdf"
    );
}

#[test]
fn test_filename_derivation_is_deterministic() {
    let a = derive_filename("42", "Podjetje, d.o.o.");
    let b = derive_filename("42", "Podjetje, d.o.o.");
    assert_eq!(a, b);
}

#[test]
fn test_differing_customers_do_not_collide() {
    let a = derive_filename("42", "Novak Janez");
    let b = derive_filename("42", "Novak Janezi");
    assert_ne!(a, b);
}

#[test]
fn test_filename_replaces_commas_and_spaces() {
    // A comma followed by a space yields "-" + "-", collapsed once.
    assert_eq!(
        derive_filename("7", "First, Second"),
        "Invoice_7_first-second.pdf"
    );
}

#[test]
fn test_invoice_number_case_is_preserved() {
    assert_eq!(
        derive_filename("INV-9", "x"),
        "Invoice_INV-9_x.pdf"
    );
}
