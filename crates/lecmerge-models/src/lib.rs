//! Shared data models for the lecmerge pipeline.
//!
//! This crate provides the pure, I/O-free parts of the pipeline:
//! - Watch-link extraction and deduplication
//! - Video ID extraction from watch links
//! - Encoding configuration

pub mod encoding;
pub mod links;
pub mod video_id;

// Re-export common types
pub use encoding::{EncodingConfig, DEFAULT_VOLUME_SCALE};
pub use links::{deduplicate, extract_watch_links};
pub use video_id::{extract_video_id, watch_url, VideoIdError, VideoIdResult};
