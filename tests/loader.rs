mod common;

use leasedoc_pdf::{ContractStatus, Error, contract};

#[test]
fn full_bundle_loads_every_field_group() {
    let bundle = contract::parse(&common::fixture("full.json")).expect("parse full.json");
    let c = &bundle.contract;

    assert_eq!(c.contract_number.as_deref(), Some("AB12345678"));
    assert_eq!(c.lessee_company_name, "Kuljetus Virtanen Oy");
    assert_eq!(c.lessee_tax_country, None);
    assert_eq!(c.seller_company_name.as_deref(), Some("Konekauppa Oy"));
    assert_eq!(c.lease_objects.len(), 2);
    assert_eq!(c.lease_objects[0].year_model, Some(2021));
    assert!(!c.lease_objects[1].is_new);
    assert_eq!(c.lease_objects[1].accessories, None);
    assert_eq!(c.advance_payment, Some(150.5));
    assert_eq!(c.residual_value, Some(12000.0));
    assert_eq!(c.rent_installments_start, Some(2));
    assert_eq!(c.lease_period_months, 48);
    assert_eq!(c.status, ContractStatus::Signed);
    assert_eq!(bundle.application.equipment_description, "Kuorma-autot");
}

#[test]
fn nulls_and_missing_fields_take_defaults() {
    let bundle = contract::parse(&common::fixture("minimal.json")).expect("parse minimal.json");
    let c = &bundle.contract;

    assert_eq!(c.lessor_company_name, "");
    assert!(c.lease_objects.is_empty());
    assert_eq!(c.contract_number, None);
    assert_eq!(c.advance_payment, None);
    assert_eq!(c.monthly_rent, 1250.0);
    assert_eq!(c.status, ContractStatus::PendingAdmin);
    assert_eq!(bundle.application.equipment_serial_number.as_deref(), Some("CAT0320XK"));
}

#[test]
fn application_is_optional() {
    let json = br#"{"contract": {
        "lessee_company_name": "A",
        "lessor_company_name": "B",
        "monthly_rent": 10,
        "lease_period_months": 12
    }}"#;
    let bundle = contract::parse_bytes(json).expect("parse bundle");
    assert_eq!(bundle.application.equipment_description, "");
    assert_eq!(bundle.contract.status, ContractStatus::Draft);
}

#[test]
fn malformed_amount_is_rejected() {
    let err = contract::parse(&common::fixture("invalid_rent.json")).expect_err("string rent");
    assert!(matches!(err, Error::InvalidRecord(_)), "{err}");
    assert!(err.to_string().starts_with("invalid contract record"));
}

#[test]
fn null_monthly_rent_is_rejected() {
    let json = br#"{"contract": {"monthly_rent": null, "lease_period_months": 12}}"#;
    assert!(matches!(contract::parse_bytes(json), Err(Error::InvalidRecord(_))));
}

#[test]
fn missing_monthly_rent_is_rejected() {
    let json = br#"{"contract": {
        "lessee_company_name": "A",
        "lessor_company_name": "B",
        "lease_period_months": 12
    }}"#;
    let err = contract::parse_bytes(json).expect_err("no monthly rent");
    assert!(matches!(err, Error::InvalidRecord(_)), "{err}");
    assert!(err.to_string().contains("monthly_rent"), "{err}");
}

#[test]
fn missing_lease_period_is_rejected() {
    let json = br#"{"contract": {
        "lessee_company_name": "A",
        "lessor_company_name": "B",
        "monthly_rent": 10
    }}"#;
    let err = contract::parse_bytes(json).expect_err("no lease period");
    assert!(matches!(err, Error::InvalidRecord(_)), "{err}");
    assert!(err.to_string().contains("lease_period_months"), "{err}");
}

#[test]
fn bare_names_without_terms_are_rejected() {
    let json = br#"{"contract": {"lessee_company_name": "A", "lessor_company_name": "B"}}"#;
    assert!(matches!(contract::parse_bytes(json), Err(Error::InvalidRecord(_))));
}

#[test]
fn unknown_status_is_rejected() {
    let json =
        br#"{"contract": {"monthly_rent": 1, "lease_period_months": 12, "status": "ARCHIVED"}}"#;
    assert!(matches!(contract::parse_bytes(json), Err(Error::InvalidRecord(_))));
}

#[test]
fn missing_file_reports_path() {
    let err = contract::parse(&common::fixture("does-not-exist.json")).expect_err("missing file");
    match err {
        Error::Io(e) => assert!(e.to_string().contains("does-not-exist.json"), "{e}"),
        other => panic!("expected Io error, got {other}"),
    }
}
