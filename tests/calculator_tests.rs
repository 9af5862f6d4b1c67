use racun_server::invoice::calculator::compute;
use racun_server::invoice::models::ServiceLine;

fn line(name: &str, price: f64, rabat: Option<f64>) -> ServiceLine {
    ServiceLine {
        name: name.to_string(),
        price,
        rabat,
    }
}

const EPS: f64 = 1e-9;

#[test]
fn test_single_line_with_discount() {
    let (lines, totals) = compute(&[line("Consulting", 100.0, Some(10.0))]);

    assert_eq!(lines.len(), 1);
    let l = &lines[0];
    assert_eq!(l.quantity, 1);
    assert!((l.price_sum - 100.0).abs() < EPS);
    assert!((l.taxable_base - 90.0).abs() < EPS);
    assert!((l.tax_amount - 19.80).abs() < EPS);
    assert!((l.line_total - 109.80).abs() < EPS);

    assert!((totals.taxable_base_sum - 90.0).abs() < EPS);
    assert!((totals.tax_sum - 19.80).abs() < EPS);
    assert!((totals.grand_total - 109.80).abs() < EPS);
}

#[test]
fn test_two_line_worked_example() {
    let (lines, totals) = compute(&[
        line("Consulting", 100.0, Some(10.0)),
        line("Support", 50.0, None),
    ]);

    assert!((lines[0].taxable_base - 90.0).abs() < EPS);
    assert!((lines[0].line_total - 109.80).abs() < EPS);
    assert!((lines[1].taxable_base - 50.0).abs() < EPS);
    assert!((lines[1].tax_amount - 11.0).abs() < EPS);
    assert!((lines[1].line_total - 61.0).abs() < EPS);

    assert!((totals.taxable_base_sum - 140.0).abs() < EPS);
    assert!((totals.tax_sum - 30.80).abs() < EPS);
    assert!((totals.grand_total - 170.80).abs() < EPS);
}

#[test]
fn test_empty_sequence_yields_zero_totals() {
    let (lines, totals) = compute(&[]);
    assert!(lines.is_empty());
    assert_eq!(totals.taxable_base_sum, 0.0);
    assert_eq!(totals.tax_sum, 0.0);
    assert_eq!(totals.grand_total, 0.0);
}

#[test]
fn test_missing_rabat_defaults_to_zero() {
    let (lines, _) = compute(&[line("Hosting", 80.0, None)]);
    assert_eq!(lines[0].rabat, 0.0);
    assert!((lines[0].taxable_base - 80.0).abs() < EPS);
}

#[test]
fn test_output_preserves_input_order() {
    let (lines, _) = compute(&[
        line("c", 3.0, None),
        line("a", 1.0, None),
        line("b", 2.0, None),
    ]);
    let names: Vec<&str> = lines.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn test_per_line_bases_sum_to_totals() {
    let services: Vec<ServiceLine> = (1..=20)
        .map(|i| line(&format!("s{i}"), i as f64 * 13.37, Some((i % 7) as f64)))
        .collect();
    let (lines, totals) = compute(&services);

    let summed: f64 = lines.iter().map(|l| l.taxable_base).sum();
    assert!((summed - totals.taxable_base_sum).abs() < 1e-6);
    assert!((totals.tax_sum - totals.taxable_base_sum * 0.22).abs() < EPS);
    assert!(
        (totals.grand_total - (totals.taxable_base_sum + totals.tax_sum)).abs() < EPS
    );
}

#[test]
fn test_negative_price_propagates_without_panic() {
    let (lines, totals) = compute(&[line("Refund", -40.0, None)]);
    assert!((lines[0].taxable_base + 40.0).abs() < EPS);
    assert!(totals.grand_total < 0.0);
}

#[test]
fn test_discount_above_hundred_goes_negative() {
    let (lines, _) = compute(&[line("Odd", 100.0, Some(150.0))]);
    assert!((lines[0].taxable_base + 50.0).abs() < EPS);
    assert!((lines[0].line_total + 61.0).abs() < EPS);
}

#[test]
fn test_full_discount_zeroes_the_line() {
    let (lines, totals) = compute(&[line("Gratis", 100.0, Some(100.0))]);
    assert!(lines[0].taxable_base.abs() < EPS);
    assert!(lines[0].line_total.abs() < EPS);
    assert!(totals.grand_total.abs() < EPS);
}
