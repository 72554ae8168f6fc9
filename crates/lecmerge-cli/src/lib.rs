//! Command-line pipeline that merges linked videos into one normalized file.

pub mod error;
pub mod pipeline;

pub use error::{PipelineError, PipelineResult};
pub use pipeline::{plan_downloads, run, PipelineConfig};
