//! Small-talk and clock handlers
//!
//! Handles: greeting, wellbeing, farewell, time, date, joke
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::sync::Arc;

use crate::commands::context::AssistantContext;
use crate::commands::handler::IntentHandler;
use crate::commands::intent::{Intent, IntentKind};

pub const GREETING_RESPONSE: &str = "Hello! How can I help?";
pub const WELLBEING_RESPONSE: &str = "Running at optimal parameters!";
pub const FAREWELL_RESPONSE: &str = "Shutting down. Goodbye.";

/// Handler for conversational and clock intents
pub struct UtilityHandler;

#[async_trait]
impl IntentHandler for UtilityHandler {
    fn intents(&self) -> &'static [IntentKind] {
        &[
            IntentKind::Greeting,
            IntentKind::Wellbeing,
            IntentKind::Farewell,
            IntentKind::Time,
            IntentKind::Date,
            IntentKind::Joke,
        ]
    }

    async fn handle(&self, ctx: Arc<AssistantContext>, intent: &Intent) -> Result<String> {
        let now = Local::now();
        Ok(match intent {
            Intent::Greeting => GREETING_RESPONSE.to_string(),
            Intent::Wellbeing => WELLBEING_RESPONSE.to_string(),
            Intent::Farewell => FAREWELL_RESPONSE.to_string(),
            Intent::Time => Self::time_response(now),
            Intent::Date => Self::date_response(now),
            Intent::Joke => ctx.jokes.joke(),
            other => anyhow::bail!("UtilityHandler can't handle {}", other.kind()),
        })
    }
}

impl UtilityHandler {
    fn time_response(now: DateTime<Local>) -> String {
        format!("It is {}.", now.format("%I:%M %p"))
    }

    fn date_response(now: DateTime<Local>) -> String {
        format!("Today is {}.", now.format("%A, %d %B %Y"))
    }
}
