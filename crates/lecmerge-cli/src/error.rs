//! Pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

use lecmerge_media::MediaError;
use lecmerge_models::VideoIdError;

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors from the download-boost-concat-normalize pipeline. Every stage
/// failure carries enough context to say which file or link was involved.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input file not found: {0}")]
    InputFileMissing(PathBuf),

    #[error("Could not extract a video ID from {link}: {source}")]
    VideoId {
        link: String,
        #[source]
        source: VideoIdError,
    },

    #[error("Error downloading video {index} ({link}): {source}")]
    DownloadFailed {
        index: usize,
        link: String,
        #[source]
        source: MediaError,
    },

    #[error("Error boosting audio for video {index}: {source}")]
    BoostFailed {
        index: usize,
        #[source]
        source: MediaError,
    },

    #[error("Error concatenating videos: {source}")]
    ConcatFailed {
        #[source]
        source: MediaError,
    },

    #[error("Error normalizing audio: {source}")]
    NormalizeFailed {
        #[source]
        source: MediaError,
    },

    #[error("Error preparing output folder: {source}")]
    Workspace {
        #[source]
        source: MediaError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
