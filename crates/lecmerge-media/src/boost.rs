//! Per-file audio volume boosting.

use std::path::Path;
use tracing::info;

use lecmerge_models::EncodingConfig;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;

/// Re-encode a video while scaling its audio amplitude by `volume_scale`.
///
/// The video stream is re-encoded at the configured codec and frame rate;
/// the `volume` filter takes a plain integer factor (5 means 5x amplitude,
/// not decibels). Normalization happens later, on the concatenated file.
pub async fn boost_audio(
    runner: &FfmpegRunner,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    volume_scale: u32,
    encoding: &EncodingConfig,
) -> MediaResult<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    info!(
        "Boosting audio: {} -> {} (volume x{})",
        input.display(),
        output.display(),
        volume_scale
    );

    let cmd = FfmpegCommand::new(input, output)
        .video_codec(&encoding.video_codec)
        .video_filter(format!("fps={}", encoding.fps))
        .audio_filter(format!("volume={}", volume_scale))
        .output_args(encoding.audio_args());

    runner.run(&cmd).await
}
