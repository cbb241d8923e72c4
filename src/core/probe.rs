//! Metadata fetching through the probe tool

use crate::core::runner::CommandRunner;
use crate::error::{Result, YtPickError};
use crate::types::ProbeResult;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Deserializer;
use std::time::Duration;

/// Ask the probe tool for the JSON description of `url`.
/// The URL is passed through untouched; the tool rejects what it cannot handle.
pub async fn fetch(runner: &CommandRunner, probe_bin: &str, url: &str) -> Result<ProbeResult> {
    let args = vec!["-j".to_string(), url.to_string()];

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Fetching formats...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = runner.capture(probe_bin, &args).await;
    spinner.finish_and_clear();
    let output = output?;

    if !output.success() {
        return Err(YtPickError::ProbeFailed {
            stderr: output.stderr,
        });
    }

    parse_probe_output(&output.stdout)
}

/// Decode the first JSON record on stdout.
pub fn parse_probe_output(stdout: &str) -> Result<ProbeResult> {
    let mut records = Deserializer::from_str(stdout).into_iter::<ProbeResult>();

    let first = records
        .next()
        .ok_or_else(|| YtPickError::UnexpectedProbeFormat("probe printed no metadata".into()))?
        .map_err(|e| YtPickError::UnexpectedProbeFormat(e.to_string()))?;

    let extra = records.count();
    if extra > 0 {
        tracing::warn!(extra, "probe returned more than one record, using the first");
    }

    tracing::debug!(
        filename = %first.filename,
        formats = first.formats.len(),
        thumbnails = first.thumbnails.len(),
        "probe metadata decoded"
    );
    Ok(first)
}
