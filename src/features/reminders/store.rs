//! Flat-file reminder persistence
//!
//! One JSON object per line. New reminders are appended; sweeps and deletions
//! rewrite the file with whatever is left. Every read-modify-write runs under
//! a single async mutex.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::{debug, warn};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::model::{announcement, Reminder};
use crate::features::notify::Notifier;

pub struct ReminderStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ReminderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ReminderStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a reminder to the end of the file
    pub async fn append(&self, reminder: &Reminder) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut line = serde_json::to_string(reminder)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .await
            .with_context(|| format!("Failed to append to {}", self.path.display()))?;
        file.flush().await?;

        debug!("Stored reminder {} due {}", reminder.id, reminder.due_at);
        Ok(())
    }

    /// All stored reminders ordered by due time
    pub async fn list(&self) -> Result<Vec<Reminder>> {
        let _guard = self.lock.lock().await;
        let mut reminders = self.read_all().await?;
        reminders.sort_by_key(|r| (r.due_at, r.id));
        Ok(reminders)
    }

    /// Split stored reminders into those due at `now` and the rest
    pub async fn list_due(&self, now: DateTime<Local>) -> Result<(Vec<Reminder>, Vec<Reminder>)> {
        let _guard = self.lock.lock().await;
        Ok(partition_due(self.read_all().await?, now))
    }

    /// Remove and return every reminder due at `now`
    pub async fn take_due(&self, now: DateTime<Local>) -> Result<Vec<Reminder>> {
        let _guard = self.lock.lock().await;
        let (due, remaining) = partition_due(self.read_all().await?, now);
        if !due.is_empty() {
            self.write_all(&remaining).await?;
        }
        Ok(due)
    }

    /// Fire every due reminder through `notifier` and drop it from the file
    pub async fn sweep_and_fire(&self, notifier: &dyn Notifier) -> Result<Vec<Reminder>> {
        let due = self.take_due(Local::now()).await?;
        for reminder in &due {
            notifier.notify(&announcement(reminder));
        }
        Ok(due)
    }

    /// Remove a reminder by id, returning it if it was stored
    pub async fn remove(&self, id: i64) -> Result<Option<Reminder>> {
        let _guard = self.lock.lock().await;
        let mut reminders = self.read_all().await?;
        let Some(pos) = reminders.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        let removed = reminders.remove(pos);
        self.write_all(&reminders).await?;
        Ok(Some(removed))
    }

    async fn read_all(&self) -> Result<Vec<Reminder>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };

        let mut reminders = Vec::new();
        let mut seen = HashSet::new();
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Reminder::from_line(line) {
                Some(mut reminder) => {
                    // Legacy lines take their id from the due time, so bump clashes
                    while !seen.insert(reminder.id) {
                        reminder.id += 1;
                    }
                    reminders.push(reminder);
                }
                None => warn!(
                    "Skipping unreadable reminder on line {} of {}",
                    index + 1,
                    self.path.display()
                ),
            }
        }
        Ok(reminders)
    }

    async fn write_all(&self, reminders: &[Reminder]) -> Result<()> {
        let mut contents = String::new();
        for reminder in reminders {
            contents.push_str(&serde_json::to_string(reminder)?);
            contents.push('\n');
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

/// Partition reminders into (due, remaining) relative to `now`
pub fn partition_due(
    reminders: Vec<Reminder>,
    now: DateTime<Local>,
) -> (Vec<Reminder>, Vec<Reminder>) {
    reminders.into_iter().partition(|r| r.is_due(now))
}
