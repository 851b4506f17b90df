mod common;

use leasedoc_pdf::ApplicationRecord;
use leasedoc_pdf::assemble::{LabelStyle, ObjectRow, condition_label, expand_rows};

#[test]
fn one_row_per_object_in_input_order() {
    let objects = vec![
        common::lease_object("Volvo FH16", Some(2021)),
        common::lease_object("Scania R500", None),
        common::lease_object("MAN TGX", Some(2019)),
    ];
    let rows = expand_rows(&objects, &common::application(), LabelStyle::Separate);

    let names: Vec<&str> = rows.iter().map(|r| r.brand_model.as_str()).collect();
    assert_eq!(names, ["Volvo FH16", "Scania R500", "MAN TGX"]);
    let years: Vec<&str> = rows.iter().map(|r| r.model_year.as_str()).collect();
    assert_eq!(years, ["2021", "", "2019"]);
    assert!(rows.iter().all(|r| r.condition == "Uusi"));
}

#[test]
fn combined_style_folds_year_into_name() {
    let objects = vec![
        common::lease_object("Volvo FH16", Some(2021)),
        common::lease_object("Scania R500", None),
    ];
    let rows = expand_rows(&objects, &common::application(), LabelStyle::Combined);
    assert_eq!(rows[0].brand_model, "Volvo FH16, vm. 2021");
    assert_eq!(rows[1].brand_model, "Scania R500");
    assert!(rows.iter().all(|r| r.model_year.is_empty()));
}

#[test]
fn zero_model_year_is_left_out() {
    let objects = vec![common::lease_object("Volvo FH16", Some(0))];
    let separate = expand_rows(&objects, &common::application(), LabelStyle::Separate);
    assert_eq!(separate[0].brand_model, "Volvo FH16");
    assert_eq!(separate[0].model_year, "");

    let combined = expand_rows(&objects, &common::application(), LabelStyle::Combined);
    assert_eq!(combined[0].brand_model, "Volvo FH16");
    assert_eq!(combined[0].model_year, "");
}

#[test]
fn empty_object_list_falls_back_to_application() {
    for style in [LabelStyle::Separate, LabelStyle::Combined] {
        let rows = expand_rows(&[], &common::application(), style);
        assert_eq!(
            rows,
            vec![ObjectRow {
                brand_model: "Kaivinkone CAT 320".into(),
                serial: "CAT0320XK".into(),
                ..ObjectRow::default()
            }]
        );
    }
}

#[test]
fn fallback_row_tolerates_empty_application() {
    let rows = expand_rows(&[], &ApplicationRecord::default(), LabelStyle::Separate);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], ObjectRow::default());
}

#[test]
fn objects_present_never_mix_with_fallback() {
    let objects = vec![common::lease_object("Volvo FH16", None)];
    let rows = expand_rows(&objects, &common::application(), LabelStyle::Separate);
    assert_eq!(rows.len(), 1);
    assert!(rows.iter().all(|r| r.brand_model != "Kaivinkone CAT 320"));
}

#[test]
fn missing_object_fields_render_empty() {
    let mut object = common::lease_object("Volvo FH16", None);
    object.is_new = false;
    object.accessories = None;
    object.serial_number = None;
    let rows = expand_rows(&[object], &common::application(), LabelStyle::Separate);
    assert_eq!(rows[0].condition, "Käytetty");
    assert_eq!(rows[0].accessories, "");
    assert_eq!(rows[0].serial, "");
}

#[test]
fn condition_labels() {
    assert_eq!(condition_label(true), "Uusi");
    assert_eq!(condition_label(false), "Käytetty");
}
