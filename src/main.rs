use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use leasedoc_pdf::{AssembleOptions, Error, assemble, contract, render_json, render_text};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Pdf,
    /// Plain-text outline of the assembled pages
    Text,
    /// The assembled document tree as JSON
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Assemble a financing-lease contract from a JSON bundle and export it
#[derive(Parser)]
#[command(name = "leasedoc-pdf", version)]
struct Cli {
    /// JSON bundle: {"contract": {...}, "application": {...}}
    input: PathBuf,
    /// Output file (defaults to the input path with the format's extension)
    output: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pdf)]
    format: OutputFormat,
    /// PNG or JPEG logo drawn in the header and footer
    #[arg(long)]
    logo: Option<String>,
    /// Leave out the delivery confirmation page
    #[arg(long)]
    no_delivery_confirmation: bool,
}

fn run(cli: &Cli) -> Result<PathBuf, Error> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension(cli.format.extension()));

    let options = AssembleOptions {
        logo: cli.logo.clone(),
        delivery_confirmation: !cli.no_delivery_confirmation,
        ..AssembleOptions::default()
    };

    match cli.format {
        OutputFormat::Pdf => {
            leasedoc_pdf::convert_contract_to_pdf(&cli.input, &output, &options)?
        }
        OutputFormat::Text | OutputFormat::Json => {
            let bundle = contract::parse(&cli.input)?;
            let doc = assemble(&bundle.contract, &bundle.application, &options);
            let rendered = if cli.format == OutputFormat::Text {
                render_text(&doc)
            } else {
                render_json(&doc)?
            };
            std::fs::write(&output, rendered)?;
        }
    }
    Ok(output)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => log::info!("Wrote {}", output.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
