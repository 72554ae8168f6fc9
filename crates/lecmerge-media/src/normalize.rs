//! Dynamic loudness normalization of the combined file.

use std::path::Path;
use tracing::info;

use lecmerge_models::EncodingConfig;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;

/// Apply dynamic loudness normalization, writing the final output file.
///
/// The video stream is copied unchanged; only audio is re-encoded, with the
/// `dynaudnorm` filter equalizing perceived loudness over time.
pub async fn normalize_loudness(
    runner: &FfmpegRunner,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    encoding: &EncodingConfig,
) -> MediaResult<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    info!(
        "Normalizing loudness: {} -> {}",
        input.display(),
        output.display()
    );

    let cmd = FfmpegCommand::new(input, output)
        .video_codec("copy")
        .audio_filter("dynaudnorm")
        .output_args(encoding.audio_args());

    runner.run(&cmd).await
}
