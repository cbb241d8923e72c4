//! Turning menu selections into a download invocation

use crate::error::{Result, YtPickError};
use crate::types::{DownloadPlan, Selections, StreamKind, ThumbnailMode};
use std::path::{Path, PathBuf};

/// Container used when only audio is downloaded
pub const AUDIO_CONTAINER: &str = "mp3";
/// Container used whenever a video stream is involved
pub const MERGE_CONTAINER: &str = "mp4";
/// Image format thumbnails are converted to in `ThumbnailMode::Best`
pub const THUMBNAIL_FORMAT: &str = "jpg";

/// Build the plan from the probe's filename hint and the user's picks.
///
/// The predicted path is a guess: the probe's filename with the container
/// extension swapped in. It is only checked after the download.
pub fn build_plan(filename_hint: &str, selections: &Selections) -> Result<DownloadPlan> {
    let video = selections
        .video
        .as_ref()
        .map(|v| v.selector(StreamKind::Video));
    let audio = selections
        .audio
        .as_ref()
        .map(|a| a.selector(StreamKind::Audio));

    let audio_only = audio.is_some() && video.is_none();

    // Video first, then audio
    let parts: Vec<String> = video.into_iter().chain(audio).collect();
    if parts.is_empty() {
        return Err(YtPickError::NothingSelected);
    }

    let mut extra_args = selections.thumbnail.flags();
    let container = if audio_only {
        extra_args.extend(["-x", "--audio-format", AUDIO_CONTAINER].map(String::from));
        AUDIO_CONTAINER
    } else {
        extra_args.extend(["--merge-output-format", MERGE_CONTAINER].map(String::from));
        MERGE_CONTAINER
    };

    Ok(DownloadPlan {
        format_expr: parts.join("+"),
        extra_args,
        audio_only,
        output_path: Path::new(filename_hint).with_extension(container),
        thumbnail: selections.thumbnail,
    })
}

impl DownloadPlan {
    /// Arguments for `<download-bin> -f <expr> <url> [extra...]`
    pub fn command_args(&self, url: &str) -> Vec<String> {
        let mut args = vec!["-f".to_string(), self.format_expr.clone(), url.to_string()];
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Where the converted thumbnail should land, if one was requested as a file
    pub fn thumbnail_path(&self) -> Option<PathBuf> {
        (self.thumbnail == ThumbnailMode::Best)
            .then(|| self.output_path.with_extension(THUMBNAIL_FORMAT))
    }
}
