//! Result formatting shared by the `process` and `normalize` commands.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use fakt_core::invoice::rules::{format_amount, format_nip};
use fakt_core::ExtractionResult;

/// Output options.
#[derive(Args)]
pub struct OutputArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Report missing or suspicious fields
    #[arg(long)]
    validate: bool,

    /// Print the text searched by the fallback rules
    #[arg(long)]
    show_text: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Write the result and any requested diagnostics.
pub fn emit(result: &ExtractionResult, text: &str, args: &OutputArgs) -> anyhow::Result<()> {
    if args.validate {
        let issues = result.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    if args.show_text {
        eprintln!("{} {}", style("Text:").blue(), text);
    }

    let output = format_result(result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let total = result.total.to_string();
    wtr.write_record(["vat_id", "address", "total"])?;
    wtr.write_record([result.vat_id.as_str(), result.address.as_str(), total.as_str()])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let mut output = String::new();

    if result.vat_id.is_empty() {
        output.push_str("NIP:     -\n");
    } else {
        output.push_str(&format!("NIP:     {}\n", format_nip(&result.vat_id)));
    }

    let address = result.address.lines().collect::<Vec<_>>().join(", ");
    output.push_str(&format!(
        "Address: {}\n",
        if address.is_empty() { "-" } else { address.as_str() }
    ));
    output.push_str(&format!("Total:   {}\n", format_amount(result.total)));

    output
}
