//! Type definitions for yt-pick
//!
//! Source of truth for all data structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================
// Probe Types
// ============================================

/// Metadata reported by `<probe-bin> -j <url>`
///
/// Only `filename` and `formats` are required; a record without them is not
/// something we know how to turn into a download.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProbeResult {
    /// Default output filename the probe tool would use
    pub filename: String,
    pub formats: Vec<FormatDescriptor>,
    #[serde(default)]
    pub thumbnails: Vec<ThumbnailDescriptor>,
}

/// One stream offered by the source
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormatDescriptor {
    #[serde(rename = "format_id", default)]
    pub id: String,
    #[serde(default)]
    pub acodec: Option<String>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub audio_ext: Option<String>,
    #[serde(default)]
    pub video_ext: Option<String>,
    /// Audio bitrate in kbit/s
    #[serde(default)]
    pub abr: Option<f64>,
    /// Video bitrate in kbit/s
    #[serde(default)]
    pub vbr: Option<f64>,
    /// Audio sample rate in Hz
    #[serde(default)]
    pub asr: Option<f64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub fps: Option<f64>,
    /// Size in bytes
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
}

impl FormatDescriptor {
    /// Plain numeric ids only; anything else is a merged or synthetic format.
    pub fn has_standard_id(&self) -> bool {
        let id = self.id.trim();
        !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
    }

    pub fn has_audio(&self) -> bool {
        codec_present(self.acodec.as_deref())
    }

    pub fn has_video(&self) -> bool {
        codec_present(self.vcodec.as_deref())
    }

    /// Which menu this format belongs to. Audio wins over video.
    pub fn kind(&self) -> Option<StreamKind> {
        if self.has_audio() {
            Some(StreamKind::Audio)
        } else if self.has_video() {
            Some(StreamKind::Video)
        } else {
            None
        }
    }
}

fn codec_present(codec: Option<&str>) -> bool {
    codec.is_some_and(|c| c != "none")
}

/// A thumbnail image offered by the source
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThumbnailDescriptor {
    pub url: String,
    /// e.g., "1280x720"
    #[serde(default)]
    pub resolution: Option<String>,
}

/// Probed formats split per menu, in probe order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidates {
    pub audio: Vec<FormatDescriptor>,
    pub video: Vec<FormatDescriptor>,
    pub thumbnails: Vec<ThumbnailDescriptor>,
}

// ============================================
// Selection Types
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Audio,
    Video,
}

/// What the user picked in the audio or video menu.
/// "no audio" / "no video" is represented as `None` around this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamChoice {
    Best,
    Format(String),
}

impl StreamChoice {
    /// Format selector understood by the download tool
    pub fn selector(&self, kind: StreamKind) -> String {
        match (self, kind) {
            (Self::Best, StreamKind::Audio) => "bestaudio".into(),
            (Self::Best, StreamKind::Video) => "bestvideo".into(),
            (Self::Format(id), _) => id.clone(),
        }
    }
}

/// What to do with the thumbnail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailMode {
    /// Write the best thumbnail next to the download, as jpg
    Best,
    /// Embed the thumbnail into the output container
    Embed,
    #[default]
    Skip,
}

impl ThumbnailMode {
    pub fn token(self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Embed => "embed",
            Self::Skip => "none",
        }
    }

    /// Extra download-tool flags for this mode
    pub fn flags(self) -> Vec<String> {
        let flags: &[&str] = match self {
            Self::Best => &["--write-thumbnail", "--convert-thumbnails", "jpg"],
            Self::Embed => &["--embed-thumbnail"],
            Self::Skip => &[],
        };
        flags.iter().map(|f| f.to_string()).collect()
    }
}

/// Outcome of the three menus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections {
    pub audio: Option<StreamChoice>,
    pub video: Option<StreamChoice>,
    pub thumbnail: ThumbnailMode,
}

/// Everything needed to run the download tool and find its output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPlan {
    /// e.g., "137+140"
    pub format_expr: String,
    /// Flags appended after the URL
    pub extra_args: Vec<String>,
    pub audio_only: bool,
    /// Where we expect the download tool to write, relative to the output directory
    pub output_path: PathBuf,
    pub thumbnail: ThumbnailMode,
}

// ============================================
// Config Types
// ============================================

/// Menu selector type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectorType {
    Fzf,
    #[default]
    Dialoguer,
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Binary used to fetch metadata (default: "yt-dlp")
    pub probe_bin: String,
    /// Binary used to download (default: "yt-dlp")
    pub download_bin: String,
    /// ffmpeg is needed by the download tool for merging and extraction
    pub ffmpeg_bin: String,
    /// Preselected audio entry: "best", "none" or a format id
    pub audio_format: Option<String>,
    /// Preselected video entry: "best", "none" or a format id
    pub video_format: Option<String>,
    /// Preselected thumbnail entry: "best", "embed" or "none"
    pub thumbnail_mode: Option<String>,
    /// Download directory path (empty = system download dir)
    pub output_dir: String,
    /// Menu selector
    pub selector: SelectorType,
    /// Editor command (default: "nvim")
    pub editor: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe_bin: "yt-dlp".into(),
            download_bin: "yt-dlp".into(),
            ffmpeg_bin: "ffmpeg".into(),
            audio_format: Some("best".into()),
            video_format: Some("best".into()),
            thumbnail_mode: None,
            output_dir: String::new(), // Resolved at runtime to ~/Downloads
            selector: SelectorType::default(),
            editor: "nvim".into(),
        }
    }
}

// ============================================
// Selector Types
// ============================================

/// Item displayed in selector menu
#[derive(Debug, Clone)]
pub struct MenuItem<T> {
    /// Display text
    pub label: String,
    /// Underlying value
    pub value: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(id: &str, acodec: Option<&str>, vcodec: Option<&str>) -> FormatDescriptor {
        serde_json::from_value(serde_json::json!({
            "format_id": id,
            "acodec": acodec,
            "vcodec": vcodec,
        }))
        .unwrap()
    }

    #[test]
    fn test_standard_id() {
        assert!(format("140", None, None).has_standard_id());
        assert!(format(" 22 ", None, None).has_standard_id());
        assert!(!format("hls-720p", None, None).has_standard_id());
        assert!(!format("", None, None).has_standard_id());
        assert!(!format("137-drc", None, None).has_standard_id());
    }

    #[test]
    fn test_kind_prefers_audio() {
        assert_eq!(format("18", Some("mp4a.40.2"), Some("avc1")).kind(), Some(StreamKind::Audio));
        assert_eq!(format("137", Some("none"), Some("avc1")).kind(), Some(StreamKind::Video));
        assert_eq!(format("137", None, Some("vp9")).kind(), Some(StreamKind::Video));
        assert_eq!(format("sb0", Some("none"), Some("none")).kind(), None);
    }

    #[test]
    fn test_thumbnail_flags() {
        assert_eq!(
            ThumbnailMode::Best.flags(),
            vec!["--write-thumbnail", "--convert-thumbnails", "jpg"]
        );
        assert_eq!(ThumbnailMode::Embed.flags(), vec!["--embed-thumbnail"]);
        assert!(ThumbnailMode::Skip.flags().is_empty());
    }

    #[test]
    fn test_stream_choice_selector() {
        assert_eq!(StreamChoice::Best.selector(StreamKind::Audio), "bestaudio");
        assert_eq!(StreamChoice::Best.selector(StreamKind::Video), "bestvideo");
        assert_eq!(StreamChoice::Format("251".into()).selector(StreamKind::Audio), "251");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: Config = serde_json::from_str(r#"{"output_dir": "/tmp/media", "selector": "fzf"}"#).unwrap();
        assert_eq!(cfg.output_dir, "/tmp/media");
        assert_eq!(cfg.selector, SelectorType::Fzf);
        assert_eq!(cfg.probe_bin, "yt-dlp");
        assert_eq!(cfg.audio_format.as_deref(), Some("best"));
        assert_eq!(cfg.thumbnail_mode, None);
    }
}
