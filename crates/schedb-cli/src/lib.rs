//! CLI library components for the schedb converter.

pub mod logging;
pub mod pipeline;
