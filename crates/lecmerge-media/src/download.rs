//! Video download using yt-dlp.

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::command::check_ytdlp;
use crate::error::{MediaError, MediaResult};

/// Format selector: any stream that carries an audio channel, under yt-dlp's
/// own ranking, with a plain "best" fallback. Which audio-capable format wins
/// is yt-dlp's call, not ours.
const FORMAT_SELECTOR: &str = "b[acodec!=none]/b";

/// Download a video from a watch URL using yt-dlp.
///
/// One file is written per successful call, at `output_path`. A failed
/// download leaves whatever partial file yt-dlp produced in place; cleanup
/// is not this function's job.
pub async fn download_video(url: &str, output_path: impl AsRef<Path>) -> MediaResult<()> {
    let output_path = output_path.as_ref();

    check_ytdlp()?;

    info!(
        "Downloading video from {} to {}",
        url,
        output_path.display()
    );

    let output_path_str = output_path.to_string_lossy();
    let args = [
        "--no-playlist",
        "-f",
        FORMAT_SELECTOR,
        "-o",
        &output_path_str,
        url,
    ];

    let output = Command::new("yt-dlp")
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("yt-dlp stderr: {}", stderr);

        let error_msg = stderr.lines().last().unwrap_or("Unknown error");
        return Err(MediaError::download_failed(format!(
            "yt-dlp failed: {}",
            error_msg
        )));
    }

    // Verify the file was created
    if !output_path.exists() {
        return Err(MediaError::FileNotFound(output_path.to_path_buf()));
    }

    let file_size = output_path.metadata()?.len();
    info!(
        output = %output_path.display(),
        size_mb = file_size as f64 / (1024.0 * 1024.0),
        "Downloaded video successfully"
    );

    Ok(())
}
