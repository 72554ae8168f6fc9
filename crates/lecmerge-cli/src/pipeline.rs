//! The end-to-end merge pipeline.
//!
//! Stages run strictly in sequence: scan the input text for watch links,
//! deduplicate them, download each video, boost each file's audio, then
//! concatenate and loudness-normalize into the requested output file.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{info, warn};

use lecmerge_media::{
    boost_audio, concat_videos, download_video, normalize_loudness, FfmpegRunner,
    OutputWorkspace, COMBINED_FILE_NAME, MANIFEST_FILE_NAME,
};
use lecmerge_models::{
    deduplicate, extract_video_id, extract_watch_links, watch_url, EncodingConfig,
    DEFAULT_VOLUME_SCALE,
};

use crate::error::{PipelineError, PipelineResult};

/// Tunables for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Amplitude multiplier applied to each file before concatenation.
    pub volume_scale: u32,
    pub encoding: EncodingConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            volume_scale: DEFAULT_VOLUME_SCALE,
            encoding: EncodingConfig::default(),
        }
    }
}

/// Scan `text` for watch links and return them deduplicated, first
/// occurrence order preserved.
pub fn plan_downloads(text: &str) -> Vec<String> {
    deduplicate(extract_watch_links(text))
}

/// Run the full pipeline: read `input_file`, download every distinct linked
/// video, boost, concatenate, and normalize into `output_file`.
///
/// Downloads land in a folder named after the current local date under the
/// working directory. The concat manifest and the combined intermediate live
/// in a temporary directory that is removed when the run finishes.
pub async fn run(
    input_file: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
    config: &PipelineConfig,
) -> PipelineResult<()> {
    let input_file = input_file.as_ref();
    let output_file = output_file.as_ref();

    if !input_file.exists() {
        return Err(PipelineError::InputFileMissing(input_file.to_path_buf()));
    }

    // The input may contain arbitrary bytes around the links; decode lossily
    // rather than rejecting the whole file.
    let bytes = fs::read(input_file).await?;
    let text = String::from_utf8_lossy(&bytes);

    let links = plan_downloads(&text);
    info!(count = links.len(), "Found distinct video links");
    if links.is_empty() {
        warn!("No video links found in {}", input_file.display());
    }

    let workspace = OutputWorkspace::create_for_today(".")
        .await
        .map_err(|source| PipelineError::Workspace { source })?;

    let mut downloaded: Vec<PathBuf> = Vec::with_capacity(links.len());
    for (index, link) in links.iter().enumerate() {
        let id = extract_video_id(link).map_err(|source| PipelineError::VideoId {
            link: link.clone(),
            source,
        })?;
        let url = watch_url(&id);

        let path = workspace.video_path(index);
        download_video(&url, &path)
            .await
            .map_err(|source| PipelineError::DownloadFailed {
                index,
                link: link.clone(),
                source,
            })?;
        downloaded.push(path);
    }

    let runner = FfmpegRunner::new();

    let mut boosted: Vec<PathBuf> = Vec::with_capacity(downloaded.len());
    for (index, input) in downloaded.iter().enumerate() {
        let output = workspace.boosted_path(index);
        boost_audio(&runner, input, &output, config.volume_scale, &config.encoding)
            .await
            .map_err(|source| PipelineError::BoostFailed { index, source })?;
        boosted.push(output);
    }

    // Run-scoped scratch space for the manifest and the pre-normalization
    // combined file, so concurrent runs never share intermediates.
    let scratch = tempfile::tempdir()?;
    let manifest_path = scratch.path().join(MANIFEST_FILE_NAME);
    let combined_path = scratch.path().join(COMBINED_FILE_NAME);

    concat_videos(&runner, &boosted, &manifest_path, &combined_path, &config.encoding)
        .await
        .map_err(|source| PipelineError::ConcatFailed { source })?;

    normalize_loudness(&runner, &combined_path, output_file, &config.encoding)
        .await
        .map_err(|source| PipelineError::NormalizeFailed { source })?;

    info!("Wrote normalized output to {}", output_file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_downloads_deduplicates_preserving_order() {
        let text = "\
            watch https://www.youtube.com/watch?v=first here\n\
            again https://www.youtube.com/watch?v=first\n\
            then https://www.youtube.com/watch?v=second\n\
            and https://www.youtube.com/watch?v=first once more\n";

        let links = plan_downloads(text);
        assert_eq!(
            links,
            vec![
                "https://www.youtube.com/watch?v=first",
                "https://www.youtube.com/watch?v=second",
            ]
        );
    }

    #[test]
    fn test_plan_downloads_empty_text() {
        assert!(plan_downloads("").is_empty());
        assert!(plan_downloads("no links here").is_empty());
    }

    #[tokio::test]
    async fn test_missing_input_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist.txt");
        let output = dir.path().join("out.mp4");

        let err = run(&missing, &output, &PipelineConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::InputFileMissing(_)));
    }
}
