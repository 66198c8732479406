//! Library components for the recast CLI.

pub mod listing;
pub mod logging;
pub mod pipeline;
