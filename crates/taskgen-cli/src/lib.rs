//! CLI library components for taskgen.

pub mod logging;
pub mod pipeline;
pub mod types;
