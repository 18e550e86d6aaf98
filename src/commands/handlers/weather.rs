//! Weather handler
//!
//! Handles: weather
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::commands::context::AssistantContext;
use crate::commands::handler::IntentHandler;
use crate::commands::intent::{Intent, IntentKind};

pub struct WeatherHandler;

#[async_trait]
impl IntentHandler for WeatherHandler {
    fn intents(&self) -> &'static [IntentKind] {
        &[IntentKind::Weather]
    }

    async fn handle(&self, ctx: Arc<AssistantContext>, intent: &Intent) -> Result<String> {
        let Intent::Weather { city } = intent else {
            anyhow::bail!("WeatherHandler can't handle {}", intent.kind());
        };
        debug!("Weather requested for {}", city.as_deref().unwrap_or("(default city)"));
        Ok(ctx.weather.current(city.as_deref()).await)
    }
}
