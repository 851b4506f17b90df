pub mod assemble;
pub mod contract;
mod error;
mod fonts;
pub mod model;
mod pdf;
mod text;

pub use assemble::{AssembleOptions, assemble};
pub use contract::{
    ApplicationRecord, ContractBundle, ContractRecord, ContractStatus, LeaseObjectRecord,
};
pub use error::Error;
pub use model::Document;
pub use pdf::render as render_pdf;
pub use text::render_text;

use std::path::Path;
use std::time::Instant;

/// The document tree as pretty-printed JSON.
pub fn render_json(doc: &Document) -> Result<String, Error> {
    serde_json::to_string_pretty(doc).map_err(|e| Error::Json(e.to_string()))
}

/// Load a JSON contract bundle, assemble it and write the PDF to `output`.
pub fn convert_contract_to_pdf(
    input: &Path,
    output: &Path,
    options: &AssembleOptions,
) -> Result<(), Error> {
    let t0 = Instant::now();

    let bundle = contract::parse(input)?;
    let t_parse = t0.elapsed();

    write_pdf(&bundle, output, options, t0, t_parse)
}

pub fn convert_contract_bytes_to_pdf(
    input: &[u8],
    output: &Path,
    options: &AssembleOptions,
) -> Result<(), Error> {
    let t0 = Instant::now();

    let bundle = contract::parse_bytes(input)?;
    let t_parse = t0.elapsed();

    write_pdf(&bundle, output, options, t0, t_parse)
}

fn write_pdf(
    bundle: &ContractBundle,
    output: &Path,
    options: &AssembleOptions,
    t0: Instant,
    t_parse: std::time::Duration,
) -> Result<(), Error> {
    let doc = assemble(&bundle.contract, &bundle.application, options);
    let t_assemble = t0.elapsed();

    let bytes = pdf::render(&doc)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: parse={:.1}ms, assemble={:.1}ms, render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_parse.as_secs_f64() * 1000.0,
        (t_assemble - t_parse).as_secs_f64() * 1000.0,
        (t_render - t_assemble).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}
