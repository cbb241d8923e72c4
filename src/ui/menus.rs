//! The audio, video and thumbnail menus

use crate::error::Result;
use crate::types::{
    Candidates, Config, FormatDescriptor, MenuItem, Selections, StreamChoice, StreamKind,
    ThumbnailDescriptor, ThumbnailMode,
};
use crate::ui::selector::Selector;
use crate::utils::units::{self, NOT_AVAILABLE};

/// Value behind an audio/video entry; `None` is "no audio" / "no video"
pub type StreamEntry = Option<StreamChoice>;

/// A menu ready to be shown
#[derive(Debug, Clone)]
pub struct Menu<T> {
    pub title: &'static str,
    pub items: Vec<MenuItem<T>>,
    /// Initial cursor position
    pub default: usize,
}

impl<T: Clone> Menu<T> {
    pub fn choose(&self, selector: &Selector) -> Result<T> {
        selector.select(&self.items, self.title, self.default)
    }
}

pub fn audio_menu(formats: &[FormatDescriptor], preferred: Option<&str>) -> Menu<StreamEntry> {
    stream_menu(StreamKind::Audio, formats, preferred)
}

pub fn video_menu(formats: &[FormatDescriptor], preferred: Option<&str>) -> Menu<StreamEntry> {
    stream_menu(StreamKind::Video, formats, preferred)
}

fn stream_menu(
    kind: StreamKind,
    formats: &[FormatDescriptor],
    preferred: Option<&str>,
) -> Menu<StreamEntry> {
    let (title, best, none) = match kind {
        StreamKind::Audio => ("Select audio", "best audio", "no audio"),
        StreamKind::Video => ("Select video", "best video", "no video"),
    };

    let mut items = vec![
        MenuItem { label: best.into(), value: Some(StreamChoice::Best) },
        MenuItem { label: none.into(), value: None },
    ];
    items.extend(formats.iter().map(|f| MenuItem {
        label: match kind {
            StreamKind::Audio => audio_label(f),
            StreamKind::Video => video_label(f),
        },
        value: Some(StreamChoice::Format(f.id.trim().to_string())),
    }));

    let default = preferred
        .and_then(|token| items.iter().position(|i| stream_matches(&i.value, kind, token)))
        .unwrap_or(0);

    Menu { title, items, default }
}

/// Config tokens: "best", "none" or a format id
fn stream_matches(entry: &StreamEntry, kind: StreamKind, token: &str) -> bool {
    let token = token.trim();
    match entry {
        None => token.eq_ignore_ascii_case("none"),
        Some(StreamChoice::Best) => {
            token.eq_ignore_ascii_case("best") || token == StreamChoice::Best.selector(kind)
        }
        Some(StreamChoice::Format(id)) => id == token,
    }
}

pub fn thumbnail_menu(
    thumbnails: &[ThumbnailDescriptor],
    preferred: Option<&str>,
) -> Menu<ThumbnailMode> {
    // Thumbnails are listed worst to best
    let best = match thumbnails.last().and_then(|t| t.resolution.as_deref()) {
        Some(resolution) => format!("best thumbnail ({})", resolution),
        None => "best thumbnail".into(),
    };

    let items = vec![
        MenuItem { label: best, value: ThumbnailMode::Best },
        MenuItem {
            label: "embed thumbnail (only mp3 and mp4 support embedding)".into(),
            value: ThumbnailMode::Embed,
        },
        MenuItem { label: "no thumbnail".into(), value: ThumbnailMode::Skip },
    ];

    let default = preferred
        .and_then(|token| {
            let token = token.trim();
            items.iter().position(|i| i.value.token().eq_ignore_ascii_case(token))
        })
        .unwrap_or(2);

    Menu { title: "Select thumbnail", items, default }
}

/// Run the three menus in order
pub fn select_all(selector: &Selector, candidates: &Candidates, config: &Config) -> Result<Selections> {
    let audio = audio_menu(&candidates.audio, config.audio_format.as_deref()).choose(selector)?;
    let video = video_menu(&candidates.video, config.video_format.as_deref()).choose(selector)?;
    let thumbnail =
        thumbnail_menu(&candidates.thumbnails, config.thumbnail_mode.as_deref()).choose(selector)?;

    tracing::debug!(?audio, ?video, ?thumbnail, "selection made");
    Ok(Selections { audio, video, thumbnail })
}

fn text(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_AVAILABLE)
}

pub fn audio_label(f: &FormatDescriptor) -> String {
    format!(
        "id: {:<5}  codec: {:<10}  ext: {:<5}  lang: {:<3}  bitrate: {:<11}  sample rate: {:<10}  filesize: {}",
        f.id.trim(),
        text(f.acodec.as_deref()),
        text(f.audio_ext.as_deref()),
        text(f.language.as_deref()),
        units::bitrate(f.abr),
        units::quantity(f.asr, "Hz"),
        units::bytes(f.filesize),
    )
}

pub fn video_label(f: &FormatDescriptor) -> String {
    let dimensions = match (f.width, f.height) {
        (Some(w), Some(h)) => format!("{}x{}", w, h),
        _ => NOT_AVAILABLE.into(),
    };

    format!(
        "id: {:<5}  codec: {:<15}  ext: {:<5}  format: {:<10}  bitrate: {:<11}  fps: {:<5}  filesize: {}",
        f.id.trim(),
        text(f.vcodec.as_deref()),
        text(f.video_ext.as_deref()),
        dimensions,
        units::bitrate(f.vbr),
        units::number(f.fps),
        units::bytes(f.filesize),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{classify::classify, probe::parse_probe_output};
    use crate::ui::selector::scripted::ScriptedSelector;

    fn formats() -> Candidates {
        classify(
            &parse_probe_output(
                r#"{
                "filename": "clip.webm",
                "formats": [
                    {"format_id": "140", "acodec": "mp4a.40.2", "vcodec": "none", "audio_ext": "m4a",
                     "abr": 129.47, "asr": 44100, "filesize": 3456789, "language": "en"},
                    {"format_id": "251", "acodec": "opus", "vcodec": "none", "audio_ext": "webm"},
                    {"format_id": "137", "acodec": "none", "vcodec": "avc1.640028", "video_ext": "mp4",
                     "vbr": 4400, "width": 1920, "height": 1080, "fps": 30, "filesize": 150000000}
                ],
                "thumbnails": [
                    {"url": "a", "resolution": "120x90"},
                    {"url": "b", "resolution": "1280x720"}
                ]
            }"#,
            )
            .unwrap(),
        )
    }

    fn labels<T>(menu: &Menu<T>) -> Vec<&str> {
        menu.items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn test_sentinels_lead() {
        let c = formats();
        let audio = audio_menu(&c.audio, None);
        assert_eq!(&labels(&audio)[..2], ["best audio", "no audio"]);
        assert_eq!(audio.items.len(), 4);
        assert_eq!(audio.items[0].value, Some(StreamChoice::Best));
        assert_eq!(audio.items[1].value, None);
        assert_eq!(audio.items[2].value, Some(StreamChoice::Format("140".into())));

        let video = video_menu(&c.video, None);
        assert_eq!(&labels(&video)[..2], ["best video", "no video"]);
        assert_eq!(video.items.len(), 3);
    }

    #[test]
    fn test_empty_candidates_only_sentinels() {
        let empty = Candidates::default();
        assert_eq!(labels(&audio_menu(&empty.audio, None)), ["best audio", "no audio"]);
        assert_eq!(labels(&video_menu(&empty.video, None)), ["best video", "no video"]);

        let thumbs = thumbnail_menu(&empty.thumbnails, None);
        let values: Vec<ThumbnailMode> = thumbs.items.iter().map(|i| i.value).collect();
        assert_eq!(values, [ThumbnailMode::Best, ThumbnailMode::Embed, ThumbnailMode::Skip]);
        assert_eq!(thumbs.items[0].label, "best thumbnail");
    }

    #[test]
    fn test_defaults() {
        let c = formats();
        assert_eq!(audio_menu(&c.audio, None).default, 0);
        assert_eq!(audio_menu(&c.audio, Some("best")).default, 0);
        assert_eq!(audio_menu(&c.audio, Some("none")).default, 1);
        assert_eq!(audio_menu(&c.audio, Some("251")).default, 3);
        assert_eq!(audio_menu(&c.audio, Some("999")).default, 0);
        assert_eq!(video_menu(&c.video, Some("bestvideo")).default, 0);
        assert_eq!(video_menu(&c.video, Some("137")).default, 2);

        assert_eq!(thumbnail_menu(&c.thumbnails, None).default, 2);
        assert_eq!(thumbnail_menu(&c.thumbnails, Some("best")).default, 0);
        assert_eq!(thumbnail_menu(&c.thumbnails, Some("embed")).default, 1);
        assert_eq!(thumbnail_menu(&c.thumbnails, Some("bogus")).default, 2);
    }

    #[test]
    fn test_rows() {
        let c = formats();
        let audio = audio_label(&c.audio[0]);
        assert!(audio.starts_with("id: 140    codec: mp4a.40.2   ext: m4a    lang: en "));
        assert!(audio.contains("bitrate: 129.47 kb/s"));
        assert!(audio.contains("sample rate: 44.1 kHz"));
        assert!(audio.ends_with("filesize: 3.46 MB"));

        let sparse = audio_label(&c.audio[1]);
        assert!(sparse.contains("lang: N/A"));
        assert!(sparse.contains("sample rate: N/A"));
        assert!(sparse.ends_with("filesize: N/A"));
        // Columns line up regardless of content
        assert_eq!(audio.find("bitrate:"), sparse.find("bitrate:"));

        let video = video_label(&c.video[0]);
        assert!(video.contains("format: 1920x1080"));
        assert!(video.contains("bitrate: 4.4 Mb/s"));
        assert!(video.contains("fps: 30 "));
        assert!(video.ends_with("filesize: 150 MB"));
    }

    #[test]
    fn test_best_thumbnail_shows_resolution() {
        let c = formats();
        assert_eq!(thumbnail_menu(&c.thumbnails, None).items[0].label, "best thumbnail (1280x720)");
    }

    #[test]
    fn test_select_all_empty_probe() {
        let selector = Selector::Scripted(ScriptedSelector::new([None, None, None]));
        let picks = select_all(&selector, &Candidates::default(), &Config::default()).unwrap();

        assert_eq!(picks.audio, Some(StreamChoice::Best));
        assert_eq!(picks.video, Some(StreamChoice::Best));
        assert_eq!(picks.thumbnail, ThumbnailMode::Skip);

        let Selector::Scripted(s) = &selector else { unreachable!() };
        let shown = s.shown.borrow();
        let counts: Vec<usize> = shown.iter().map(|m| m.labels.len()).collect();
        assert_eq!(counts, [2, 2, 3]);
    }

    #[test]
    fn test_cancelled_menu_stops() {
        let selector = Selector::Scripted(ScriptedSelector::new([Some(2)]));
        let err = select_all(&selector, &formats(), &Config::default()).unwrap_err();
        assert!(matches!(err, crate::error::YtPickError::Cancelled));
    }
}
