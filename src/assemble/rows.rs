use crate::contract::{ApplicationRecord, LeaseObjectRecord};

/// How the model year is presented in a leased-object row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelStyle {
    /// Model year in its own column.
    Separate,
    /// Model year folded into the name: `Volvo FH16, vm. 2021`.
    Combined,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectRow {
    pub condition: String,
    pub brand_model: String,
    pub accessories: String,
    pub serial: String,
    pub model_year: String,
}

pub fn condition_label(is_new: bool) -> &'static str {
    if is_new { "Uusi" } else { "Käytetty" }
}

impl LabelStyle {
    /// A model year of 0 counts as unknown.
    fn apply(self, brand_model: &str, year: Option<u32>) -> (String, String) {
        match (self, year.filter(|&y| y != 0)) {
            (LabelStyle::Separate, Some(y)) => (brand_model.to_string(), y.to_string()),
            (LabelStyle::Separate, None) => (brand_model.to_string(), String::new()),
            (LabelStyle::Combined, Some(y)) => (format!("{brand_model}, vm. {y}"), String::new()),
            (LabelStyle::Combined, None) => (brand_model.to_string(), String::new()),
        }
    }
}

/// One row per leased object in input order, or a single row describing the
/// application's equipment when the contract lists none.
pub fn expand_rows(
    objects: &[LeaseObjectRecord],
    application: &ApplicationRecord,
    style: LabelStyle,
) -> Vec<ObjectRow> {
    if objects.is_empty() {
        return vec![ObjectRow {
            brand_model: application.equipment_description.clone(),
            serial: application.equipment_serial_number.clone().unwrap_or_default(),
            ..ObjectRow::default()
        }];
    }

    objects
        .iter()
        .map(|obj| {
            let (brand_model, model_year) = style.apply(&obj.brand_model, obj.year_model);
            ObjectRow {
                condition: condition_label(obj.is_new).to_string(),
                brand_model,
                accessories: obj.accessories.clone().unwrap_or_default(),
                serial: obj.serial_number.clone().unwrap_or_default(),
                model_year,
            }
        })
        .collect()
}
