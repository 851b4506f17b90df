#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use leasedoc_pdf::model::{Block, Document, Page, RowKind, Table};
use leasedoc_pdf::{ApplicationRecord, ContractRecord, ContractStatus, LeaseObjectRecord};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(name)
}

/// Output directory: tests/output/<case>/
pub fn output_dir(case: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output").join(case);
    fs::create_dir_all(&dir).expect("create output dir");
    dir
}

pub fn lease_object(brand_model: &str, year: Option<u32>) -> LeaseObjectRecord {
    LeaseObjectRecord {
        is_new: true,
        brand_model: brand_model.to_string(),
        accessories: Some("Nosturi".to_string()),
        serial_number: Some(format!("SN-{}", brand_model.len())),
        year_model: year,
    }
}

/// Only the fields a record must carry; everything optional left out.
pub fn minimal_contract() -> ContractRecord {
    ContractRecord {
        lessee_company_name: "Kuljetus Virtanen Oy".to_string(),
        lessor_company_name: "Rahoitus Nordic Oy".to_string(),
        monthly_rent: 1250.0,
        lease_period_months: 48,
        ..ContractRecord::default()
    }
}

/// A signed contract with every optional section filled in.
pub fn full_contract() -> ContractRecord {
    ContractRecord {
        contract_number: Some("AB12345678".to_string()),
        lessee_business_id: Some("1234567-8".to_string()),
        lessee_street_address: Some("Satamatie 4".to_string()),
        lessee_postal_code: Some("00980".to_string()),
        lessee_city: Some("Helsinki".to_string()),
        lessee_contact_person: Some("Matti Virtanen".to_string()),
        lessee_phone: Some("+358 40 123 4567".to_string()),
        lessee_email: Some("matti@virtanen.fi".to_string()),
        lessor_business_id: Some("7654321-0".to_string()),
        lessor_street_address: Some("Mannerheimintie 10".to_string()),
        lessor_postal_code: Some("00100".to_string()),
        lessor_city: Some("Helsinki".to_string()),
        seller_company_name: Some("Konekauppa Oy".to_string()),
        seller_business_id: Some("1111111-1".to_string()),
        seller_street_address: Some("Teollisuuskatu 2".to_string()),
        seller_postal_code: Some("33100".to_string()),
        seller_city: Some("Tampere".to_string()),
        lease_objects: vec![
            lease_object("Volvo FH16", Some(2021)),
            lease_object("Scania R500", None),
        ],
        usage_location: Some("Vantaa".to_string()),
        estimated_delivery_date: Some("2024-04-02".to_string()),
        other_delivery_terms: Some("Toimitus asiakkaan varastolle".to_string()),
        advance_payment: Some(150.5),
        rent_installments_count: Some(47),
        rent_installments_start: Some(2),
        rent_installments_end: Some(48),
        residual_value: Some(12000.0),
        processing_fee: Some(9.5),
        arrangement_fee: Some(250.0),
        invoicing_method: Some("Paperilasku".to_string()),
        lease_start_date: Some("2024-04-15".to_string()),
        bank_name: Some("Nordea".to_string()),
        bank_iban: Some("FI21 1234 5600 0007 85".to_string()),
        bank_bic: Some("NDEAFIHH".to_string()),
        guarantees: Some("Takaus".to_string()),
        guarantee_type: Some("Henkilötakaus".to_string()),
        special_conditions: Some("Vakuutus oltava voimassa koko vuokra-ajan.".to_string()),
        lessee_signature_date: Some("2024-03-15".to_string()),
        lessee_signature_place: Some("Helsinki".to_string()),
        lessee_signer_name: Some("Matti Virtanen".to_string()),
        lessor_signature_date: Some("2024-03-16".to_string()),
        lessor_signature_place: Some("Espoo".to_string()),
        lessor_signer_name: Some("Liisa Laine".to_string()),
        status: ContractStatus::Signed,
        created_at: Some("2024-03-01T09:30:00Z".to_string()),
        signed_at: Some("2024-03-15T14:05:00+02:00".to_string()),
        ..minimal_contract()
    }
}

pub fn application() -> ApplicationRecord {
    ApplicationRecord {
        equipment_description: "Kaivinkone CAT 320".to_string(),
        equipment_serial_number: Some("CAT0320XK".to_string()),
    }
}

pub fn table_texts(table: &Table, kind: RowKind) -> Vec<Vec<String>> {
    table
        .rows_of(kind)
        .map(|row| row.cells.iter().map(|c| c.text()).collect())
        .collect()
}

/// All visible text of a page, one entry per paragraph or cell.
pub fn page_texts(page: &Page) -> Vec<String> {
    let mut out = Vec::new();
    for block in &page.blocks {
        match block {
            Block::Paragraph(p) => out.push(p.text()),
            Block::Table(t) => {
                for row in &t.rows {
                    out.extend(row.cells.iter().map(|c| c.text()));
                }
            }
            Block::Header(h) => {
                out.push(h.title.clone());
                out.extend(h.company_name.clone());
                out.extend(h.contract_number.clone());
            }
            Block::Signatures(blocks) => {
                for b in blocks {
                    out.push(b.title.clone());
                    out.extend(b.place_and_date.clone());
                    out.extend(b.signer_name.clone());
                    out.extend(
                        b.signature
                            .as_ref()
                            .map(|s| format!("{} {}", s.label, s.signed_on)),
                    );
                }
            }
            Block::Footer(f) => {
                out.extend(f.lines.iter().map(|p| p.text()));
                out.extend(f.page_label.clone());
            }
        }
    }
    out
}

pub fn document_contains(doc: &Document, needle: &str) -> bool {
    doc.pages
        .iter()
        .flat_map(page_texts)
        .any(|t| t.contains(needle))
}

/// Number of `/Type /Page` objects (not `/Pages`) in a PDF byte stream.
pub fn pdf_page_count(pdf: &[u8]) -> usize {
    let needle = b"/Type /Page";
    pdf.windows(needle.len() + 1)
        .filter(|w| &w[..needle.len()] == needle && w[needle.len()] != b's')
        .count()
}

/// Every `x y w h re` operand list in the PDF's Flate-compressed content streams.
pub fn content_rects(pdf: &[u8]) -> Vec<[f32; 4]> {
    let start = b"stream\n";
    let end = b"\nendstream";
    let mut rects = Vec::new();
    let mut rest = pdf;
    while let Some(pos) = find(rest, start) {
        let body = &rest[pos + start.len()..];
        let Some(len) = find(body, end) else { break };
        if let Ok(raw) = miniz_oxide::inflate::decompress_to_vec_zlib(&body[..len]) {
            let text = String::from_utf8_lossy(&raw);
            let tokens: Vec<&str> = text.split_whitespace().collect();
            for (i, token) in tokens.iter().enumerate() {
                if *token != "re" || i < 4 {
                    continue;
                }
                let nums: Vec<f32> =
                    tokens[i - 4..i].iter().filter_map(|t| t.parse().ok()).collect();
                if let [x, y, w, h] = nums[..] {
                    rects.push([x, y, w, h]);
                }
            }
        }
        rest = &body[len + end.len()..];
    }
    rects
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
