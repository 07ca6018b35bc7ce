//! Normalize command - re-run field normalization on a saved field list.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use fakt_core::{full_text, normalize, StructuredField};

use super::output::{emit, OutputArgs};

/// Arguments for the normalize command.
#[derive(Args)]
pub struct NormalizeArgs {
    /// JSON file with an array of {"label", "value"} fields
    #[arg(required = true)]
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

pub async fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let content = fs::read_to_string(&args.input)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", args.input.display(), e))?;
    let fields: Vec<StructuredField> = serde_json::from_str(&content)?;

    debug!("Loaded {} fields from {}", fields.len(), args.input.display());

    let result = normalize(&fields);
    emit(&result, &full_text(&fields), &args.output)
}
