mod cli;

use clap::Parser;
use shot_core::{BatchError, run_batch};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();
    tracing::info!(
        dir = %config.source_dir.display(),
        max_width = config.params.max_width,
        max_height = config.params.max_height,
        target_kb = config.params.target_kb,
        apply_exif_orientation = config.params.apply_exif_orientation,
        "starting"
    );

    match run_batch(&config) {
        Ok(summary) => {
            for report in summary.reports() {
                tracing::debug!(
                    output = %report.output.display(),
                    quality = report.quality,
                    svg_bytes = report.svg_bytes,
                    "converted"
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            match &e {
                BatchError::SourceDirNotFound { .. } => {
                    tracing::error!(error = %e, "source directory missing");
                }
                BatchError::Params(_) | BatchError::InvalidPattern(_) => {
                    tracing::error!(error = %e, "invalid configuration");
                }
            }
            ExitCode::FAILURE
        }
    }
}
