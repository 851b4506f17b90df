/// Display-only fallbacks for fields a contract record leaves empty.
///
/// These never flow back into the record. The fee amounts are placeholders
/// for incomplete drafts, not contractual terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationDefaults {
    pub processing_fee: f64,
    pub arrangement_fee: f64,
    pub invoicing_method: &'static str,
    pub lessor_name: &'static str,
    pub monogram: char,
    pub tax_country: &'static str,
    pub usage_location: &'static str,
    pub delivery_method: &'static str,
    pub missing_business_id: &'static str,
    pub instruction_email: &'static str,
    pub contract_number_placeholder: &'static str,
    pub first_installment: u32,
    pub due_date_without_start: &'static str,
    pub lease_start_pending: &'static str,
    pub blank_line: &'static str,
    pub service_name: &'static str,
}

impl PresentationDefaults {
    pub const FI: PresentationDefaults = PresentationDefaults {
        processing_fee: 500.0,
        arrangement_fee: 10.0,
        invoicing_method: "E-Lasku",
        lessor_name: "Rahoittaja Oy",
        monogram: 'R',
        tax_country: "Suomi",
        usage_location: "Suomi",
        delivery_method: "Toimitus",
        missing_business_id: "-",
        instruction_email: "asiakaspalvelu@rahoittaja.fi",
        contract_number_placeholder: "XXXXXXXXXX",
        first_installment: 1,
        due_date_without_start: "Toimituspäivästä",
        lease_start_pending: "(täytetään toimituksen jälkeen)",
        blank_line: "_______________",
        service_name: "green",
    };
}

impl Default for PresentationDefaults {
    fn default() -> Self {
        PresentationDefaults::FI
    }
}
