//! # Notes Feature
//!
//! Append-only plain text notes, one per line.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use anyhow::{Context, Result};
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct NoteBook {
    path: PathBuf,
}

impl NoteBook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        NoteBook { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a note as a single line
    pub async fn save(&self, text: &str) -> Result<()> {
        let note = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if note.is_empty() {
            anyhow::bail!("Cannot save an empty note");
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        file.write_all(format!("{note}\n").as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        file.flush().await?;

        debug!("Saved note to {}", self.path.display());
        Ok(())
    }

    /// Every saved note in the order it was written
    pub async fn list(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(contents
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", self.path.display())),
        }
    }
}
