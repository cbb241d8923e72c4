//! Utilities: paths, unit formatting

pub mod paths;
pub mod units;
