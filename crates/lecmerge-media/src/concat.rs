//! Merging boosted files with FFmpeg's concat demuxer.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use lecmerge_models::EncodingConfig;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;

/// Manifest file name inside the run's temporary directory.
pub const MANIFEST_FILE_NAME: &str = "videos.txt";

/// Combined (pre-normalization) file name inside the run's temporary
/// directory.
pub const COMBINED_FILE_NAME: &str = "combined_output.mp4";

/// Write a concat-demuxer manifest: one `file '<path>'` line per input, in
/// the order given.
///
/// The demuxer resolves relative manifest entries against the manifest's own
/// directory, not against this process's working directory. Relative inputs
/// are therefore absolutized before being written, so the manifest can live
/// anywhere (a temp directory included) and still name the right files.
pub async fn write_manifest(manifest_path: impl AsRef<Path>, files: &[PathBuf]) -> MediaResult<()> {
    let cwd = std::env::current_dir()?;
    let mut contents = String::new();
    for file in files {
        let path = if file.is_absolute() {
            file.clone()
        } else {
            cwd.join(file)
        };
        contents.push_str(&format!("file '{}'\n", path.display()));
    }
    fs::write(manifest_path.as_ref(), contents).await?;
    Ok(())
}

/// Concatenate `files` into `output` via the concat demuxer.
///
/// The manifest is written to `manifest_path`; callers are expected to hand
/// in a run-scoped path (a temporary directory) so concurrent runs cannot
/// clobber each other's manifests. `-safe 0` is required because the
/// manifest entries are arbitrary caller paths.
pub async fn concat_videos(
    runner: &FfmpegRunner,
    files: &[PathBuf],
    manifest_path: &Path,
    output: &Path,
    encoding: &EncodingConfig,
) -> MediaResult<()> {
    info!(
        count = files.len(),
        output = %output.display(),
        "Concatenating boosted videos"
    );

    write_manifest(manifest_path, files).await?;

    let cmd = FfmpegCommand::new(manifest_path, output)
        .input_args(["-f", "concat", "-safe", "0"])
        .video_codec(&encoding.video_codec)
        .output_args(encoding.audio_args());

    runner.run(&cmd).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_manifest_lines_in_order() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join(MANIFEST_FILE_NAME);
        let files = vec![
            dir.path().join("boosted_0.mp4"),
            dir.path().join("boosted_1.mp4"),
        ];

        write_manifest(&manifest, &files).await.unwrap();

        let contents = fs::read_to_string(&manifest).await.unwrap();
        assert_eq!(
            contents,
            format!(
                "file '{}'\nfile '{}'\n",
                files[0].display(),
                files[1].display()
            )
        );
    }

    #[tokio::test]
    async fn test_write_manifest_absolutizes_relative_entries() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join(MANIFEST_FILE_NAME);
        let files = vec![PathBuf::from("2024-09-01/boosted_0.mp4")];

        write_manifest(&manifest, &files).await.unwrap();

        let contents = fs::read_to_string(&manifest).await.unwrap();
        let expected = std::env::current_dir()
            .unwrap()
            .join("2024-09-01/boosted_0.mp4");
        assert_eq!(contents, format!("file '{}'\n", expected.display()));
    }

    #[tokio::test]
    async fn test_manifest_entries_resolve_from_manifest_directory() {
        // The boosted file lives in one directory, the manifest in another.
        // Every manifest entry must still name an existing file when read
        // relative to the manifest's directory, which is how the concat
        // demuxer reads it. Absolute entries satisfy that trivially.
        let media_dir = TempDir::new().unwrap();
        let boosted = media_dir.path().join("boosted_0.mp4");
        fs::write(&boosted, b"video bytes").await.unwrap();

        let scratch = TempDir::new().unwrap();
        let manifest = scratch.path().join(MANIFEST_FILE_NAME);
        write_manifest(&manifest, &[boosted.clone()]).await.unwrap();

        let contents = fs::read_to_string(&manifest).await.unwrap();
        for line in contents.lines() {
            let entry = line
                .strip_prefix("file '")
                .and_then(|rest| rest.strip_suffix('\''))
                .unwrap();
            let resolved = scratch.path().join(entry);
            assert!(resolved.exists(), "unresolvable manifest entry: {entry}");
        }
    }

    #[tokio::test]
    async fn test_write_manifest_empty_input() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join(MANIFEST_FILE_NAME);

        write_manifest(&manifest, &[]).await.unwrap();

        let contents = fs::read_to_string(&manifest).await.unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_concat_command_arguments() {
        let encoding = EncodingConfig::default();
        let cmd = FfmpegCommand::new("videos.txt", "combined_output.mp4")
            .input_args(["-f", "concat", "-safe", "0"])
            .video_codec(&encoding.video_codec)
            .output_args(encoding.audio_args());

        let args = cmd.build_args();
        assert!(args.contains(&"concat".to_string()));
        assert!(args.contains(&"-safe".to_string()));
        // Concatenation re-encodes but applies no frame rate filter.
        assert!(!args.contains(&"-vf".to_string()));
    }

    #[tokio::test]
    async fn test_concat_surfaces_tool_failure() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join(MANIFEST_FILE_NAME);
        let output = dir.path().join(COMBINED_FILE_NAME);
        let files = vec![dir.path().join("boosted_0.mp4")];

        let runner = FfmpegRunner::with_program("false");
        let err = concat_videos(&runner, &files, &manifest, &output, &EncodingConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, crate::MediaError::FfmpegFailed { .. }));
    }
}
