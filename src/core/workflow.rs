//! One run: probe, classify, pick, plan, download

use crate::core::classify::classify;
use crate::core::downloader::{self, DownloadOutcome};
use crate::core::plan::build_plan;
use crate::core::probe;
use crate::core::runner::CommandRunner;
use crate::error::Result;
use crate::types::{Config, DownloadPlan, ProbeResult};
use crate::ui::menus::select_all;
use crate::ui::selector::Selector;

pub struct Workflow<'a> {
    config: &'a Config,
    runner: &'a CommandRunner,
    selector: &'a Selector,
}

impl<'a> Workflow<'a> {
    pub fn new(config: &'a Config, runner: &'a CommandRunner, selector: &'a Selector) -> Self {
        Self { config, runner, selector }
    }

    /// Make sure every external binary can be started before touching the network
    pub async fn check_dependencies(&self) -> Result<()> {
        self.runner
            .require(&[
                self.config.probe_bin.as_str(),
                self.config.download_bin.as_str(),
                self.config.ffmpeg_bin.as_str(),
            ])
            .await
    }

    /// Classify the probe result, ask the user, and build the invocation
    pub fn plan(&self, probe: &ProbeResult) -> Result<DownloadPlan> {
        let candidates = classify(probe);
        let selections = select_all(self.selector, &candidates, self.config)?;
        build_plan(&probe.filename, &selections)
    }

    pub async fn run(&self, url: &str) -> Result<DownloadOutcome> {
        let probe = probe::fetch(self.runner, &self.config.probe_bin, url).await?;
        let plan = self.plan(&probe)?;
        tracing::info!(format = %plan.format_expr, output = %plan.output_path.display(), "downloading");
        downloader::download(self.runner, &self.config.download_bin, url, &plan).await
    }
}
