//! FFmpeg and yt-dlp CLI wrappers for the lecmerge pipeline.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building and a subprocess runner
//! - Video download via yt-dlp
//! - The dated output workspace for downloaded and boosted files
//! - The three media operations of the pipeline (boost, concat, normalize)

pub mod boost;
pub mod command;
pub mod concat;
pub mod download;
pub mod error;
pub mod normalize;
pub mod workdir;

pub use boost::boost_audio;
pub use command::{check_ffmpeg, check_ytdlp, FfmpegCommand, FfmpegRunner};
pub use concat::{concat_videos, write_manifest, COMBINED_FILE_NAME, MANIFEST_FILE_NAME};
pub use download::download_video;
pub use error::{MediaError, MediaResult};
pub use normalize::normalize_loudness;
pub use workdir::OutputWorkspace;
