use std::fmt::Write;

use crate::model::{
    Block, Document, Footer, Header, Logo, Page, PageKind, RowKind, SignatureBlock, Table,
};

/// Plain-text outline of a document: pages in order, one indented section
/// per block, table rows as `|`-separated cells.
pub fn render_text(doc: &Document) -> String {
    let mut out = String::new();
    for (i, page) in doc.pages.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_page(&mut out, i + 1, page);
    }
    out
}

fn page_title(kind: PageKind) -> &'static str {
    match kind {
        PageKind::Contract => "Sopimus",
        PageKind::GeneralTerms => "Yleiset sopimusehdot",
        PageKind::Signatures => "Allekirjoitukset",
        PageKind::DeliveryConfirmation => "Toimituksen hyväksymisilmoitus",
    }
}

fn write_page(out: &mut String, number: usize, page: &Page) {
    let _ = writeln!(out, "=== Page {number}: {} ===", page_title(page.kind));
    for block in &page.blocks {
        match block {
            Block::Header(h) => write_header(out, h),
            Block::Paragraph(p) => {
                let _ = writeln!(out, "{}", p.text());
            }
            Block::Table(t) => write_table(out, t),
            Block::Signatures(blocks) => {
                for b in blocks {
                    write_signature(out, b);
                }
            }
            Block::Footer(f) => write_footer(out, f),
        }
    }
}

fn logo_text(logo: &Logo) -> String {
    match logo {
        Logo::Image { uri, .. } => format!("[logo {uri}]"),
        Logo::Monogram(ch) => format!("[{ch}]"),
    }
}

fn write_header(out: &mut String, h: &Header) {
    let mut parts: Vec<String> = Vec::new();
    if let Some(logo) = &h.logo {
        parts.push(logo_text(logo));
    }
    if let Some(name) = &h.company_name {
        parts.push(name.clone());
    }
    if let Some(bid) = &h.business_id {
        parts.push(format!("Y-tunnus: {bid}"));
    }
    parts.push(h.title.to_uppercase());
    if let Some(number) = &h.contract_number {
        parts.push(format!("Sopimusnumero: {number}"));
    }
    let _ = writeln!(out, "{}", parts.join(" | "));
}

fn write_table(out: &mut String, t: &Table) {
    let _ = writeln!(out, "[{:?}]", t.role);
    for row in &t.rows {
        let cells: Vec<String> = row.cells.iter().map(|c| c.text().replace('\n', " / ")).collect();
        let marker = match row.kind {
            RowKind::Title => "#",
            RowKind::ColumnHeadings => "=",
            RowKind::Item => "*",
            RowKind::Detail => "-",
        };
        let _ = writeln!(out, "  {marker} {}", cells.join(" | "));
    }
}

fn write_signature(out: &mut String, b: &SignatureBlock) {
    let _ = writeln!(out, "{}", b.title);
    let _ = writeln!(
        out,
        "  Paikka ja päivämäärä: {}",
        b.place_and_date.as_deref().unwrap_or("____________________")
    );
    match &b.signature {
        Some(sig) if sig.signed_on.is_empty() => {
            let _ = writeln!(out, "  Allekirjoitus: \u{2713} {}", sig.label);
        }
        Some(sig) => {
            let _ = writeln!(out, "  Allekirjoitus: \u{2713} {} {}", sig.label, sig.signed_on);
        }
        None => {
            let _ = writeln!(out, "  Allekirjoitus: ____________________");
        }
    }
    let _ = writeln!(
        out,
        "  Nimenselvennys: {}",
        b.signer_name.as_deref().unwrap_or("____________________")
    );
}

fn write_footer(out: &mut String, f: &Footer) {
    if f.initials {
        let _ = writeln!(out, "NIMIKIRJAIMET ___________");
    }
    if let Some(logo) = &f.logo {
        let _ = writeln!(out, "{}", logo_text(logo));
    }
    for line in &f.lines {
        let _ = writeln!(out, "{}", line.text());
    }
    if let Some(label) = &f.page_label {
        let _ = writeln!(out, "{label}");
    }
}
