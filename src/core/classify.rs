//! Splitting probed formats into audio, video and thumbnail candidates

use crate::types::{Candidates, ProbeResult, StreamKind};

/// Partition the probe result per menu. Probe order is kept, since the
/// probe tool already lists formats by preference.
pub fn classify(probe: &ProbeResult) -> Candidates {
    let mut candidates = Candidates::default();

    for format in probe.formats.iter().filter(|f| f.has_standard_id()) {
        match format.kind() {
            Some(StreamKind::Audio) => candidates.audio.push(format.clone()),
            Some(StreamKind::Video) => candidates.video.push(format.clone()),
            None => {}
        }
    }

    candidates.thumbnails = probe
        .thumbnails
        .iter()
        .filter(|t| t.resolution.is_some())
        .cloned()
        .collect();

    tracing::debug!(
        audio = candidates.audio.len(),
        video = candidates.video.len(),
        thumbnails = candidates.thumbnails.len(),
        "formats classified"
    );
    candidates
}
