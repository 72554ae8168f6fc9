//! Dated output workspace for downloaded and boosted files.
//!
//! Files are named by ordinal index within a folder named after the current
//! local date. The folder is reused when it already exists, so same-day
//! reruns overwrite the previous run's ordinally-named files.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tokio::fs;
use tracing::debug;

use crate::error::MediaResult;

/// The dated folder holding ordinal downloads and their boosted variants.
#[derive(Debug, Clone)]
pub struct OutputWorkspace {
    dir: PathBuf,
}

impl OutputWorkspace {
    /// Folder name for a given date, e.g. `2024-09-01`.
    pub fn folder_name(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Open (creating if absent) the workspace for today's local date,
    /// under `parent`.
    pub async fn create_for_today(parent: impl AsRef<Path>) -> MediaResult<Self> {
        let date = chrono::Local::now().date_naive();
        Self::create_for_date(parent, date).await
    }

    /// Open (creating if absent) the workspace for a specific date.
    pub async fn create_for_date(parent: impl AsRef<Path>, date: NaiveDate) -> MediaResult<Self> {
        let dir = parent.as_ref().join(Self::folder_name(date));
        if !dir.exists() {
            fs::create_dir_all(&dir).await?;
            debug!("Created output folder {}", dir.display());
        }
        Ok(Self { dir })
    }

    /// The workspace directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path for the raw download with the given ordinal index.
    pub fn video_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.mp4", index))
    }

    /// Path for the boosted variant of the given ordinal index.
    pub fn boosted_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("boosted_{}.mp4", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_folder_name_format() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(OutputWorkspace::folder_name(date), "2024-09-01");
    }

    #[tokio::test]
    async fn test_creates_dated_folder() {
        let parent = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();

        let ws = OutputWorkspace::create_for_date(parent.path(), date)
            .await
            .unwrap();
        assert!(ws.dir().is_dir());
        assert_eq!(ws.dir(), parent.path().join("2024-09-01"));
    }

    #[tokio::test]
    async fn test_same_day_reuse() {
        let parent = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();

        let first = OutputWorkspace::create_for_date(parent.path(), date)
            .await
            .unwrap();
        tokio::fs::write(first.video_path(0), b"run one")
            .await
            .unwrap();

        // A second run on the same day targets the same folder, and its
        // ordinals restart at 0.
        let second = OutputWorkspace::create_for_date(parent.path(), date)
            .await
            .unwrap();
        assert_eq!(first.dir(), second.dir());
        tokio::fs::write(second.video_path(0), b"run two")
            .await
            .unwrap();

        let contents = tokio::fs::read(first.video_path(0)).await.unwrap();
        assert_eq!(contents, b"run two");
    }

    #[tokio::test]
    async fn test_ordinal_paths() {
        let parent = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let ws = OutputWorkspace::create_for_date(parent.path(), date)
            .await
            .unwrap();

        assert!(ws.video_path(0).ends_with("2024-09-01/0.mp4"));
        assert!(ws.video_path(7).ends_with("2024-09-01/7.mp4"));
        assert!(ws.boosted_path(7).ends_with("2024-09-01/boosted_7.mp4"));
    }
}
