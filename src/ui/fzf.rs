//! fzf selector implementation

use crate::error::{Result, YtPickError};
use crate::types::MenuItem;
use std::io::Write;
use std::process::{Command, Stdio};

pub struct FzfSelector;

impl FzfSelector {
    pub fn new() -> Self {
        Self
    }

    pub fn select<T: Clone>(&self, items: &[MenuItem<T>], prompt: &str, default: usize) -> Result<T> {
        // Build input: one item per line with index prefix
        let input: String = items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}\t{}", i, item.label))
            .collect::<Vec<_>>()
            .join("\n");

        // fzf positions are 1-based
        let start = format!("load:pos({})", default + 1);
        let prompt = format!("{} > ", prompt);

        let mut child = Command::new("fzf")
            .args([
                "--prompt", &prompt,
                "--height", "40%",
                "--reverse",
                "--no-multi",
                "--no-sort",
                "--delimiter", "\t",
                "--with-nth", "2..",  // Show only the label
                "--bind", &start,
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| YtPickError::Spawn(format!("Failed to start fzf: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes())?;
        }

        let output = child.wait_with_output()?;

        // 130 = Esc/Ctrl-C, 1 = no match; neither is a choice
        if !output.status.success() {
            tracing::debug!(code = ?output.status.code(), "fzf exited without a selection");
            return Err(YtPickError::Cancelled);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let index: usize = stdout
            .trim()
            .split('\t')
            .next()
            .and_then(|i| i.parse().ok())
            .ok_or(YtPickError::Cancelled)?;

        items
            .get(index)
            .map(|item| item.value.clone())
            .ok_or(YtPickError::Cancelled)
    }

    pub fn is_available(&self) -> bool {
        Command::new("which")
            .arg("fzf")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl Default for FzfSelector {
    fn default() -> Self {
        Self::new()
    }
}
