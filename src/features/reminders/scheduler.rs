//! Reminder timers and the periodic due sweep
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Cancellable per-reminder timers, deletion cancels pending firings
//! - 1.0.0: Polling scheduler

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, TimeDelta};
use dashmap::DashMap;
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::model::{announcement, Reminder};
use super::store::ReminderStore;
use crate::features::notify::Notifier;

/// Longest delay accepted for a reminder (one year)
pub const MAX_DELAY_MINUTES: i64 = 60 * 24 * 365;

/// Reminders further out than this get no timer and are left to the due sweep
const MAX_TIMER_DELAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Owns reminder timers and delivers reminders through a notifier
///
/// A reminder is delivered by whichever of its timer or the due sweep removes it
/// from the store first, so it is announced at most once.
#[derive(Clone)]
pub struct ReminderScheduler {
    store: Arc<ReminderStore>,
    notifier: Arc<dyn Notifier>,
    timers: Arc<DashMap<i64, CancellationToken>>,
    sweep_interval: Duration,
}

impl ReminderScheduler {
    pub fn new(
        store: Arc<ReminderStore>,
        notifier: Arc<dyn Notifier>,
        sweep_interval: Duration,
    ) -> Self {
        ReminderScheduler {
            store,
            notifier,
            timers: Arc::new(DashMap::new()),
            sweep_interval,
        }
    }

    pub fn store(&self) -> &Arc<ReminderStore> {
        &self.store
    }

    /// Schedule `message` to be announced `minutes` from now
    pub async fn schedule(&self, message: &str, minutes: i64) -> Result<Reminder> {
        if minutes <= 0 {
            anyhow::bail!("Reminder delay must be a positive number of minutes, got {minutes}");
        }
        if minutes > MAX_DELAY_MINUTES {
            anyhow::bail!("Reminder delay of {minutes} minutes exceeds {MAX_DELAY_MINUTES}");
        }
        let due_at = Local::now()
            .checked_add_signed(TimeDelta::minutes(minutes))
            .ok_or_else(|| anyhow!("Reminder delay of {minutes} minutes is out of range"))?;

        let reminder = self.add(message, None, due_at).await?;
        info!("Scheduled reminder {} in {minutes} minute(s)", reminder.id);
        Ok(reminder)
    }

    /// Store a reminder for an absolute time and arm its timer
    pub async fn add(
        &self,
        message: &str,
        note: Option<&str>,
        due_at: DateTime<Local>,
    ) -> Result<Reminder> {
        let message = message.trim();
        if message.is_empty() {
            anyhow::bail!("Reminder message must not be empty");
        }

        let reminder = Reminder::new(message, note.map(str::to_string), due_at);
        self.store.append(&reminder).await?;
        self.arm(&reminder);
        Ok(reminder)
    }

    /// Delete a reminder and cancel its timer
    ///
    /// Returns false when no reminder with that id is stored.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.cancel_timer(id);
        let removed = self.store.remove(id).await?;
        if removed.is_some() {
            info!("Deleted reminder {id}");
        }
        Ok(removed.is_some())
    }

    pub async fn list(&self) -> Result<Vec<Reminder>> {
        self.store.list().await
    }

    /// Fire every stored reminder that is already due
    ///
    /// Catches reminders whose timer never ran, e.g. after a restart.
    pub async fn sweep(&self) -> Result<usize> {
        let fired = self.store.sweep_and_fire(self.notifier.as_ref()).await?;
        for reminder in &fired {
            self.cancel_timer(reminder.id);
        }
        if !fired.is_empty() {
            info!("Due sweep fired {} reminder(s)", fired.len());
        }
        Ok(fired.len())
    }

    /// Number of timers currently armed
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Run the due sweep forever at the configured interval
    pub async fn run(self) {
        info!(
            "Reminder sweep running every {}s on {}",
            self.sweep_interval.as_secs(),
            self.store.path().display()
        );
        let mut interval = tokio::time::interval(self.sweep_interval);
        loop {
            interval.tick().await;
            if let Err(e) = self.sweep().await {
                error!("Reminder sweep failed: {e:#}");
            }
        }
    }

    fn arm(&self, reminder: &Reminder) {
        let delay = (reminder.due_at - Local::now())
            .to_std()
            .unwrap_or(Duration::ZERO);
        if delay > MAX_TIMER_DELAY {
            debug!("Reminder {} is beyond the timer horizon, leaving it to the sweep", reminder.id);
            return;
        }

        let id = reminder.id;
        let token = CancellationToken::new();
        if let Some(previous) = self.timers.insert(id, token.clone()) {
            previous.cancel();
        }
        let scheduler = self.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => debug!("Timer for reminder {id} cancelled"),
                _ = tokio::time::sleep(delay) => scheduler.fire(id).await,
            }
        });
    }

    async fn fire(&self, id: i64) {
        self.timers.remove(&id);
        match self.store.remove(id).await {
            Ok(Some(reminder)) => {
                self.notifier.notify(&announcement(&reminder));
            }
            Ok(None) => debug!("Reminder {id} was already delivered or deleted"),
            Err(e) => error!("Failed to deliver reminder {id}: {e:#}"),
        }
    }

    fn cancel_timer(&self, id: i64) {
        if let Some((_, token)) = self.timers.remove(&id) {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notify::MemoryNotifier;

    fn scheduler_in(dir: &tempfile::TempDir) -> (ReminderScheduler, MemoryNotifier) {
        let notifier = MemoryNotifier::new();
        let store = Arc::new(ReminderStore::new(dir.path().join("reminders.jsonl")));
        let scheduler =
            ReminderScheduler::new(store, Arc::new(notifier.clone()), Duration::from_secs(30));
        (scheduler, notifier)
    }

    #[tokio::test]
    async fn test_schedule_persists_with_due_time() {
        let dir = tempfile::tempdir().unwrap();
        let (scheduler, _) = scheduler_in(&dir);

        let before = Local::now();
        let reminder = scheduler.schedule("call mom", 5).await.unwrap();
        let after = Local::now();

        assert_eq!(reminder.message, "call mom");
        assert!(reminder.due_at >= before + TimeDelta::minutes(5));
        assert!(reminder.due_at <= after + TimeDelta::minutes(5));
        assert_eq!(scheduler.list().await.unwrap(), vec![reminder]);
        assert_eq!(scheduler.pending_timers(), 1);
    }

    #[tokio::test]
    async fn test_schedule_rejects_non_positive_minutes() {
        let dir = tempfile::tempdir().unwrap();
        let (scheduler, _) = scheduler_in(&dir);

        assert!(scheduler.schedule("nope", 0).await.is_err());
        assert!(scheduler.schedule("nope", -3).await.is_err());
        assert!(scheduler.schedule("nope", MAX_DELAY_MINUTES + 1).await.is_err());
        assert!(scheduler.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_far_reminder_is_left_to_the_sweep() {
        let dir = tempfile::tempdir().unwrap();
        let (scheduler, _) = scheduler_in(&dir);

        let reminder = scheduler
            .add("renew passport", None, Local::now() + TimeDelta::days(30))
            .await
            .unwrap();
        assert_eq!(scheduler.pending_timers(), 0);
        assert_eq!(scheduler.list().await.unwrap(), vec![reminder]);
    }

    #[tokio::test]
    async fn test_add_rejects_empty_message() {
        let dir = tempfile::tempdir().unwrap();
        let (scheduler, _) = scheduler_in(&dir);
        assert!(scheduler.add("  ", None, Local::now()).await.is_err());
    }

    #[tokio::test]
    async fn test_timer_fires_and_removes_reminder() {
        let dir = tempfile::tempdir().unwrap();
        let (scheduler, notifier) = scheduler_in(&dir);

        scheduler
            .add("stretch", None, Local::now() + TimeDelta::milliseconds(100))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(notifier.messages(), vec!["Reminder: stretch".to_string()]);
        assert!(scheduler.list().await.unwrap().is_empty());
        assert_eq!(scheduler.pending_timers(), 0);

        // the sweep must not announce it a second time
        assert_eq!(scheduler.sweep().await.unwrap(), 0);
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_cancels_pending_timer() {
        let dir = tempfile::tempdir().unwrap();
        let (scheduler, notifier) = scheduler_in(&dir);

        let reminder = scheduler
            .add("never", Some("cancelled"), Local::now() + TimeDelta::milliseconds(200))
            .await
            .unwrap();
        assert!(scheduler.delete(reminder.id).await.unwrap());
        assert!(!scheduler.delete(reminder.id).await.unwrap());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(notifier.messages().is_empty());
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[tokio::test]
    async fn test_sweep_fires_reminders_left_from_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reminders.jsonl");
        let overdue = Reminder::new("from yesterday", None, Local::now() - TimeDelta::hours(1));
        let upcoming = Reminder::new("tomorrow", None, Local::now() + TimeDelta::days(1));
        std::fs::write(
            &path,
            format!(
                "{}\n{}\n",
                serde_json::to_string(&overdue).unwrap(),
                serde_json::to_string(&upcoming).unwrap()
            ),
        )
        .unwrap();

        let (scheduler, notifier) = scheduler_in(&dir);
        assert_eq!(scheduler.sweep().await.unwrap(), 1);
        assert_eq!(notifier.messages(), vec!["Reminder: from yesterday".to_string()]);
        assert_eq!(scheduler.list().await.unwrap(), vec![upcoming]);
    }
}
