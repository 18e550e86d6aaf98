use anyhow::Result;
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use jarvis::commands::{AssistantContext, IntentRouter};
use jarvis::core::Config;
use jarvis::http::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting {} assistant server...", config.assistant_name);
    if config.openweather_api_key.is_none() {
        info!("ℹ️ OPENWEATHER_API_KEY not set - weather requests will say so");
    }

    let ctx = Arc::new(AssistantContext::from_config(&config)?);

    // Deliver reminders left over from a previous run, then keep sweeping
    let scheduler = ctx.reminders.clone();
    tokio::spawn(async move {
        scheduler.run().await;
    });

    let router = Arc::new(IntentRouter::new(ctx));
    http::serve(&config.http_bind, AppState::new(router)).await
}
