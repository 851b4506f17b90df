mod defaults;
mod format;

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

pub use defaults::PresentationDefaults;
pub use format::{Locale, format_currency, format_date};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    #[default]
    Draft,
    PendingAdmin,
    Sent,
    Signed,
    Rejected,
    Expired,
}

/// One item of leased equipment. Sequence order is display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseObjectRecord {
    pub is_new: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub brand_model: String,
    pub accessories: Option<String>,
    pub serial_number: Option<String>,
    pub year_model: Option<u32>,
}

/// The financing application the contract was drafted from. Only consulted
/// when the contract lists no leased objects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub equipment_description: String,
    pub equipment_serial_number: Option<String>,
}

/// A contract as loaded from its JSON bundle. `monthly_rent` and
/// `lease_period_months` must be present; every other field may be missing
/// or `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub contract_number: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub lessee_company_name: String,
    pub lessee_business_id: Option<String>,
    pub lessee_street_address: Option<String>,
    pub lessee_postal_code: Option<String>,
    pub lessee_city: Option<String>,
    pub lessee_country: Option<String>,
    pub lessee_contact_person: Option<String>,
    pub lessee_phone: Option<String>,
    pub lessee_email: Option<String>,
    pub lessee_tax_country: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub lessor_company_name: String,
    pub lessor_business_id: Option<String>,
    pub lessor_street_address: Option<String>,
    pub lessor_postal_code: Option<String>,
    pub lessor_city: Option<String>,

    pub seller_company_name: Option<String>,
    pub seller_business_id: Option<String>,
    pub seller_street_address: Option<String>,
    pub seller_postal_code: Option<String>,
    pub seller_city: Option<String>,
    pub seller_contact_person: Option<String>,
    pub seller_phone: Option<String>,
    pub seller_email: Option<String>,
    pub seller_tax_country: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub lease_objects: Vec<LeaseObjectRecord>,
    pub usage_location: Option<String>,

    pub delivery_method: Option<String>,
    pub estimated_delivery_date: Option<String>,
    pub other_delivery_terms: Option<String>,

    pub advance_payment: Option<f64>,
    pub monthly_rent: f64,
    pub rent_installments_count: Option<u32>,
    pub rent_installments_start: Option<u32>,
    pub rent_installments_end: Option<u32>,
    pub residual_value: Option<f64>,
    pub processing_fee: Option<f64>,
    pub arrangement_fee: Option<f64>,
    pub invoicing_method: Option<String>,

    pub lease_period_months: u32,
    pub lease_start_date: Option<String>,

    pub bank_name: Option<String>,
    pub bank_iban: Option<String>,
    pub bank_bic: Option<String>,

    pub guarantees: Option<String>,
    pub guarantee_type: Option<String>,
    pub special_conditions: Option<String>,

    pub lessee_signature_date: Option<String>,
    pub lessee_signature_place: Option<String>,
    pub lessee_signer_name: Option<String>,
    pub lessor_signature_date: Option<String>,
    pub lessor_signature_place: Option<String>,
    pub lessor_signer_name: Option<String>,

    #[serde(default)]
    pub status: ContractStatus,
    pub created_at: Option<String>,
    pub signed_at: Option<String>,
}

/// The on-disk input: a contract and the application it belongs to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractBundle {
    pub contract: ContractRecord,
    #[serde(default)]
    pub application: ApplicationRecord,
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `Some` only when the field holds visible text.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

pub fn parse(path: &Path) -> Result<ContractBundle, Error> {
    let data = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => Error::Io(
            std::io::Error::new(e.kind(), format!("{}: {}", e, path.display())),
        ),
        _ => Error::Io(e),
    })?;
    parse_bytes(&data)
}

pub fn parse_bytes(data: &[u8]) -> Result<ContractBundle, Error> {
    let bundle: ContractBundle = serde_json::from_slice(data)?;
    log::debug!(
        "Loaded contract {:?}: {} lease object(s), status {:?}",
        bundle.contract.contract_number,
        bundle.contract.lease_objects.len(),
        bundle.contract.status,
    );
    Ok(bundle)
}
