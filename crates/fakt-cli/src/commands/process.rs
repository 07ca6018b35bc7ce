//! Process command - extract fields from a single invoice file.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use fakt_core::{full_text, normalize, AwsCredentials, ExpenseGateway, TextractGateway};

use super::config::load_config;
use super::output::{emit, OutputArgs};

/// Formats accepted by the expense analysis service.
const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "tif", "tiff"];

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    info!("Processing file: {}", args.input.display());

    let document = fs::read(&args.input)?;
    let gateway = TextractGateway::new(&config.textract, AwsCredentials::from_env());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Analyzing document...");

    let fields = gateway.analyze(document).await;
    pb.finish_and_clear();
    let fields = fields?;

    debug!("Service returned {} fields", fields.len());

    let result = normalize(&fields);
    emit(&result, &full_text(&fields), &args.output)?;

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
