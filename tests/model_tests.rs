use racun_server::invoice::models::{InvoiceRequest, ServiceLine};
use racun_server::invoice::validation::validate_request;
use serde_json::json;

fn sample_request_json() -> serde_json::Value {
    json!({
        "user": {
            "name": "Janez Novak s.p.",
            "address": "Slovenska cesta 1, 1000 Ljubljana",
            "tax_number": "12345678",
            "registration_number": "1234567000",
            "phone": "+386 40 123 456",
            "tax_payer": true,
            "bank": "NLB d.d.",
            "iban": "SI56 0201 0001 2345 678"
        },
        "customer": {
            "name": "Podjetje d.o.o.",
            "address": "Trg republike 3, 1000 Ljubljana",
            "tax_number": "87654321"
        },
        "invoice": {
            "invoice_number": "2026-017",
            "issue_date": "2026-08-01T00:00:00Z",
            "due_date": "2026-08-31T00:00:00Z"
        },
        "services": [
            { "name": "Svetovanje", "price": 100.0, "rabat": 10.0 },
            { "name": "Podpora", "price": 50.0 }
        ]
    })
}

#[test]
fn test_full_request_deserializes() {
    let req: InvoiceRequest = serde_json::from_value(sample_request_json()).unwrap();
    assert_eq!(req.services.len(), 2);
    assert_eq!(req.invoice.invoice_number, "2026-017");
    assert!(req.user.tax_payer);
}

#[test]
fn test_missing_rabat_deserializes_as_none() {
    let line: ServiceLine =
        serde_json::from_value(json!({ "name": "Podpora", "price": 50.0 })).unwrap();
    assert_eq!(line.rabat, None);
    assert_eq!(line.rabat_or_default(), 0.0);
}

#[test]
fn test_missing_dates_deserialize_as_none() {
    let mut value = sample_request_json();
    value["invoice"] = json!({ "invoice_number": "X-1" });
    let req: InvoiceRequest = serde_json::from_value(value).unwrap();
    assert!(req.invoice.issue_date.is_none());
    assert!(req.invoice.due_date.is_none());
}

#[test]
fn test_missing_required_member_is_a_shape_error() {
    let mut value = sample_request_json();
    value["customer"].as_object_mut().unwrap().remove("name");
    let result: Result<InvoiceRequest, _> = serde_json::from_value(value);
    assert!(result.is_err());
}

#[test]
fn test_valid_request_passes_validation() {
    let req: InvoiceRequest = serde_json::from_value(sample_request_json()).unwrap();
    assert!(validate_request(&req).is_ok());
}

#[test]
fn test_empty_fields_are_reported_per_field() {
    let mut req: InvoiceRequest = serde_json::from_value(sample_request_json()).unwrap();
    req.customer.name = "  ".to_string();
    req.invoice.invoice_number = String::new();
    req.services[1].name = String::new();

    let errors = validate_request(&req).unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(errors.len(), 3);
    assert!(fields.contains(&"customer.name"));
    assert!(fields.contains(&"invoice.invoice_number"));
    assert!(fields.contains(&"services[1].name"));
}

#[test]
fn test_unusual_numbers_pass_validation() {
    let mut req: InvoiceRequest = serde_json::from_value(sample_request_json()).unwrap();
    req.services[0].price = -10.0;
    req.services[1].rabat = Some(250.0);
    assert!(validate_request(&req).is_ok());
}

#[test]
fn test_empty_service_list_passes_validation() {
    let mut req: InvoiceRequest = serde_json::from_value(sample_request_json()).unwrap();
    req.services.clear();
    assert!(validate_request(&req).is_ok());
}
