//! yt-pick library
//!
//! Probe a media URL, pick audio/video/thumbnail variants, hand the rest to yt-dlp.

pub mod core;
pub mod error;
pub mod storage;
pub mod types;
pub mod ui;
pub mod utils;
