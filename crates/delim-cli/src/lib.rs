//! CLI library components for the delimited metrics cleaner.

pub mod logging;
pub mod pipeline;
