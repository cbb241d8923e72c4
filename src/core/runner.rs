//! External command execution shared by the probe and download steps

use crate::error::{Result, YtPickError};
use colored::Colorize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Captured result of a finished command
#[derive(Debug)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Runs external tools one at a time inside a working directory
#[derive(Debug, Clone)]
pub struct CommandRunner {
    workdir: PathBuf,
    echo: bool,
}

impl CommandRunner {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            echo: true,
        }
    }

    /// Stop printing `$ command` lines (tests)
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run to completion with stdout/stderr captured
    pub async fn capture(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        self.announce(program, args);

        let output = self
            .command(program, args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| spawn_error(program, e))?;

        tracing::debug!(
            program,
            status = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "command finished"
        );

        Ok(CommandOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Run attached to the terminal so the tool can draw its own progress
    pub async fn attach(&self, program: &str, args: &[String]) -> Result<ExitStatus> {
        self.announce(program, args);

        let status = self
            .command(program, args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| spawn_error(program, e))?;

        tracing::debug!(program, status = ?status.code(), "command finished");
        Ok(status)
    }

    /// A binary counts as installed if it can be started at all; its exit
    /// code with no arguments is irrelevant.
    pub async fn is_installed(&self, program: &str) -> Result<bool> {
        let result = self
            .command(program, &[])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match result {
            Ok(status) => {
                tracing::debug!(program, status = ?status.code(), "dependency present");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(spawn_error(program, e)),
        }
    }

    /// Fail with `MissingDependency` for the first binary that cannot be started
    pub async fn require(&self, programs: &[&str]) -> Result<()> {
        let mut checked: Vec<&str> = Vec::new();
        for &program in programs {
            if checked.contains(&program) {
                continue;
            }
            if !self.is_installed(program).await? {
                return Err(YtPickError::MissingDependency(program.into()));
            }
            checked.push(program);
        }
        Ok(())
    }

    fn command(&self, program: &str, args: &[String]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(&self.workdir);
        cmd
    }

    fn announce(&self, program: &str, args: &[String]) {
        let line = command_line(program, args);
        tracing::debug!(command = %line, workdir = %self.workdir.display(), "spawning");
        if self.echo {
            println!("{}", format!("$ {}", line).dimmed());
        }
    }
}

/// Render a command for display, quoting arguments that contain spaces
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(|part| {
            if part.is_empty() || part.contains(char::is_whitespace) {
                format!("\"{}\"", part)
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn spawn_error(program: &str, err: std::io::Error) -> YtPickError {
    if err.kind() == ErrorKind::NotFound {
        YtPickError::MissingDependency(program.into())
    } else {
        YtPickError::Spawn(format!("Failed to start {}: {}", program, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "yt-pick-definitely-not-installed";

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_command_line_quotes_spaces() {
        assert_eq!(
            command_line("yt-dlp", &args(&["-f", "137+140", "my clip.mp4"])),
            "yt-dlp -f 137+140 \"my clip.mp4\""
        );
    }

    #[test]
    fn test_missing_binary() {
        let runner = CommandRunner::new(std::env::temp_dir()).quiet();
        assert!(!tokio_test::block_on(runner.is_installed(MISSING)).unwrap());

        let err = tokio_test::block_on(runner.capture(MISSING, &[])).unwrap_err();
        assert!(matches!(err, YtPickError::MissingDependency(ref p) if p == MISSING));

        let err = tokio_test::block_on(runner.require(&[MISSING, MISSING])).unwrap_err();
        assert!(matches!(err, YtPickError::MissingDependency(ref p) if p == MISSING));
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_output_and_status() {
        let runner = CommandRunner::new(std::env::temp_dir()).quiet();
        let out = tokio_test::block_on(
            runner.capture("sh", &args(&["-c", "echo out; echo err >&2; exit 3"])),
        )
        .unwrap();

        assert!(!out.success());
        assert_eq!(out.status.code(), Some(3));
        assert_eq!(out.stdout.trim(), "out");
        assert_eq!(out.stderr.trim(), "err");
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_inside_workdir() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = CommandRunner::new(tmp.path()).quiet();
        let status = tokio_test::block_on(runner.attach("sh", &args(&["-c", "touch marker"]))).unwrap();

        assert!(status.success());
        assert!(tmp.path().join("marker").exists());
    }
}
