//! Reminder handler
//!
//! Handles: reminder ("remind me in N minutes ...")
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.2.0: Confirmations keep every unit of the delay
//! - 1.1.0: Reject zero-minute reminders instead of firing immediately
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::commands::context::AssistantContext;
use crate::commands::handler::IntentHandler;
use crate::commands::intent::{Intent, IntentKind};
use crate::features::reminders::scheduler::MAX_DELAY_MINUTES;

pub const NON_POSITIVE_MINUTES_RESPONSE: &str =
    "Reminders need a positive number of minutes, like \"remind me in 5 minutes to stretch\".";
pub const TOO_FAR_AHEAD_RESPONSE: &str = "That's too far ahead for me to keep track of.";

/// Handler for timed reminders
pub struct RemindHandler;

#[async_trait]
impl IntentHandler for RemindHandler {
    fn intents(&self) -> &'static [IntentKind] {
        &[IntentKind::Reminder]
    }

    async fn handle(&self, ctx: Arc<AssistantContext>, intent: &Intent) -> Result<String> {
        let Intent::Reminder { minutes, message } = intent else {
            anyhow::bail!("RemindHandler can't handle {}", intent.kind());
        };
        let minutes = *minutes;
        if minutes <= 0 {
            return Ok(NON_POSITIVE_MINUTES_RESPONSE.to_string());
        }

        if minutes > MAX_DELAY_MINUTES {
            warn!("Rejected reminder {minutes} minutes ahead");
            return Ok(TOO_FAR_AHEAD_RESPONSE.to_string());
        }

        let reminder = ctx.reminders.schedule(message, minutes).await?;
        let duration = Self::format_duration(minutes);
        info!(
            "Created reminder {} in {} ({})",
            reminder.id,
            duration,
            reminder.due_at.format("%Y-%m-%d %H:%M:%S")
        );
        Ok(format!("Reminder set for {duration} from now."))
    }
}

impl RemindHandler {
    /// Spell out a delay in minutes, e.g. "1 day 2 hours 5 minutes"
    fn format_duration(minutes: i64) -> String {
        let units = [
            (minutes / (24 * 60), "day"),
            (minutes % (24 * 60) / 60, "hour"),
            (minutes % 60, "minute"),
        ];
        let parts: Vec<String> = units
            .iter()
            .filter(|(count, _)| *count > 0)
            .map(|(count, unit)| format!("{count} {unit}{}", if *count == 1 { "" } else { "s" }))
            .collect();
        if parts.is_empty() {
            return "0 minutes".to_string();
        }
        parts.join(" ")
    }
}
