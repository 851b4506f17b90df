use crate::contract::{ContractRecord, non_empty};

pub fn has_seller(c: &ContractRecord) -> bool {
    non_empty(&c.seller_company_name).is_some()
}

pub fn has_seller_address(c: &ContractRecord) -> bool {
    non_empty(&c.seller_street_address).is_some()
}

pub fn has_lessor_address(c: &ContractRecord) -> bool {
    non_empty(&c.lessor_street_address).is_some()
}

pub fn has_special_conditions(c: &ContractRecord) -> bool {
    [&c.special_conditions, &c.guarantees, &c.guarantee_type]
        .into_iter()
        .any(|f| non_empty(f).is_some())
}

pub fn has_bank_details(c: &ContractRecord) -> bool {
    non_empty(&c.bank_name).is_some() || non_empty(&c.bank_iban).is_some()
}

pub fn has_advance_payment(c: &ContractRecord) -> bool {
    c.advance_payment.is_some_and(|v| v > 0.0)
}

pub fn has_other_delivery_terms(c: &ContractRecord) -> bool {
    non_empty(&c.other_delivery_terms).is_some()
}

/// Inclusion decision for every optional section, taken once per record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sections {
    pub seller: bool,
    pub seller_address: bool,
    pub lessor_address: bool,
    pub special_conditions: bool,
    pub delivery_confirmation: bool,
    pub bank_details: bool,
    pub advance_payment: bool,
    pub other_delivery_terms: bool,
}

impl Sections {
    pub fn select(c: &ContractRecord, delivery_confirmation: bool) -> Self {
        Self {
            seller: has_seller(c),
            seller_address: has_seller_address(c),
            lessor_address: has_lessor_address(c),
            special_conditions: has_special_conditions(c),
            delivery_confirmation,
            bank_details: has_bank_details(c),
            advance_payment: has_advance_payment(c),
            other_delivery_terms: has_other_delivery_terms(c),
        }
    }
}
