//! Downloader module - runs the download tool for a plan

use crate::core::runner::CommandRunner;
use crate::error::Result;
use crate::types::DownloadPlan;
use std::path::PathBuf;

/// What was found on disk after the download tool exited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The predicted file exists
    Saved {
        path: PathBuf,
        thumbnail: Option<PathBuf>,
    },
    /// Nothing at the predicted path; the tool may have picked another name
    Missing { expected: PathBuf },
}

/// Download `url` according to `plan`, attached to the terminal.
///
/// The exit code is only logged. Whether the download worked is judged by
/// looking for the predicted output file.
pub async fn download(
    runner: &CommandRunner,
    download_bin: &str,
    url: &str,
    plan: &DownloadPlan,
) -> Result<DownloadOutcome> {
    let status = runner.attach(download_bin, &plan.command_args(url)).await?;
    if !status.success() {
        tracing::warn!(code = ?status.code(), "download tool exited unsuccessfully");
    }

    Ok(verify(runner, plan))
}

/// Check the predicted output path inside the runner's working directory
pub fn verify(runner: &CommandRunner, plan: &DownloadPlan) -> DownloadOutcome {
    let path = runner.workdir().join(&plan.output_path);
    if !path.exists() {
        return DownloadOutcome::Missing { expected: path };
    }

    DownloadOutcome::Saved {
        path,
        thumbnail: plan.thumbnail_path().map(|t| runner.workdir().join(t)),
    }
}
