//! yt-pick - pick formats interactively, let yt-dlp download them
//!
//! Probes a URL, shows audio, video and thumbnail menus, then runs the
//! download with the composed format expression.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use yt_pick::core::downloader::DownloadOutcome;
use yt_pick::core::runner::CommandRunner;
use yt_pick::core::workflow::Workflow;
use yt_pick::error::{ErrorCode, Result, YtPickError};
use yt_pick::storage::config;
use yt_pick::types::Config;
use yt_pick::ui::selector::create_selector;
use yt_pick::utils::paths::{enter_output_dir, resolve_output_dir};

/// Pick audio, video and thumbnail variants for a media URL and download them with yt-dlp.
#[derive(Parser, Debug)]
#[command(name = "yt-pick")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Media URL (prompted for when omitted)
    url: Option<String>,

    /// Download into this directory instead of the configured one
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Preselected audio entry: "best", "none" or a format id
    #[arg(short, long)]
    audio: Option<String>,

    /// Preselected video entry: "best", "none" or a format id
    #[arg(long)]
    video: Option<String>,

    /// Preselected thumbnail entry
    #[arg(short, long, value_parser = ["best", "embed", "none"])]
    thumbnail: Option<String>,

    /// Exit right away instead of waiting for ENTER
    #[arg(long)]
    no_wait: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Edit the configuration file
    #[arg(short, long)]
    edit: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// CLI flags win over the config file for this run only
fn apply_overrides(mut cfg: Config, cli: &Cli) -> Config {
    if let Some(ref dir) = cli.output_dir {
        cfg.output_dir = dir.to_string_lossy().into_owned();
    }
    if cli.audio.is_some() {
        cfg.audio_format = cli.audio.clone();
    }
    if cli.video.is_some() {
        cfg.video_format = cli.video.clone();
    }
    if cli.thumbnail.is_some() {
        cfg.thumbnail_mode = cli.thumbnail.clone();
    }
    cfg
}

fn prompt_url() -> Result<String> {
    let input: String = dialoguer::Input::new()
        .with_prompt("Media URL")
        .interact_text()?;
    Ok(input.trim().to_string())
}

fn wait_for_enter() -> std::io::Result<()> {
    print!("press ENTER to exit");
    std::io::stdout().flush()?;
    std::io::stdin().read_line(&mut String::new())?;
    Ok(())
}

fn report(err: &YtPickError) {
    match err {
        YtPickError::ProbeFailed { stderr } => {
            println!("{}", "Critical error:".red());
            println!("{}", stderr.trim_end());
        }
        YtPickError::OutputDirMissing(dir) => {
            println!("{}", "Output directory not found (set output_dir in the config or pass --output-dir):".red());
            println!("{}", dir.display());
        }
        other => println!("{} {}", "Error:".red(), other),
    }
}

async fn run(cli: &Cli, cfg: &Config) -> Result<()> {
    let output_dir = enter_output_dir(&resolve_output_dir(&cfg.output_dir))?;
    let runner = CommandRunner::new(output_dir);
    let selector = create_selector(cfg.selector);
    let workflow = Workflow::new(cfg, &runner, &selector);

    workflow.check_dependencies().await?;

    let url = match cli.url {
        Some(ref url) => url.trim().to_string(),
        None => prompt_url()?,
    };

    match workflow.run(&url).await? {
        DownloadOutcome::Saved { path, thumbnail } => {
            if let Some(thumbnail) = thumbnail {
                println!("{}", "thumbnail stored here:".green());
                println!("{}", thumbnail.display());
            }
            println!("{}", "download stored here:".green());
            println!("{}", path.display());
        }
        DownloadOutcome::Missing { expected } => {
            println!("{}", "downloaded file not found, expected it here:".yellow());
            println!("{}", expected.display());
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Handle --edit flag
    if cli.edit {
        let cfg = config::load_config().await?;
        config::edit_config(&cfg.editor).await?;
        return Ok(());
    }

    let cfg = apply_overrides(config::load_config().await?, &cli);
    tracing::debug!(?cfg, "configuration loaded");

    let failed = match run(&cli, &cfg).await {
        Ok(()) => false,
        Err(e) if e.code() == ErrorCode::Cancelled => {
            println!("{}", "Cancelled.".dimmed());
            std::process::exit(130);
        }
        Err(e) => {
            report(&e);
            true
        }
    };

    if !cli.no_wait {
        wait_for_enter()?;
    }
    if failed {
        std::process::exit(1);
    }
    Ok(())
}
