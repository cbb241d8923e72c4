//! Core workflow: probing, classification, planning, downloading

pub mod classify;
pub mod downloader;
pub mod plan;
pub mod probe;
pub mod runner;
pub mod workflow;
