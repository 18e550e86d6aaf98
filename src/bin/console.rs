use anyhow::Result;
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use jarvis::commands::{AssistantContext, IntentKind, IntentRouter};
use jarvis::core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let ctx = Arc::new(AssistantContext::from_config(&config)?);

    let scheduler = ctx.reminders.clone();
    tokio::spawn(async move {
        scheduler.run().await;
    });

    let router = IntentRouter::new(ctx.clone());
    ctx.notifier
        .notify(&format!("{} online. How can I help?", config.assistant_name));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let routed = router.handle_text(&line).await;
        if routed.kind == Some(IntentKind::Farewell) {
            break;
        }
    }

    info!("Console session ended");
    Ok(())
}
