//! Encyclopedia lookup handler
//!
//! Handles: lookup ("who is", "what is", "tell me about", "define", "explain")
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::AssistantContext;
use crate::commands::handler::IntentHandler;
use crate::commands::intent::{Intent, IntentKind};

pub const MISSING_TOPIC_RESPONSE: &str = "What would you like me to look up?";

pub struct LookupHandler;

#[async_trait]
impl IntentHandler for LookupHandler {
    fn intents(&self) -> &'static [IntentKind] {
        &[IntentKind::Lookup]
    }

    async fn handle(&self, ctx: Arc<AssistantContext>, intent: &Intent) -> Result<String> {
        let Intent::Lookup { topic } = intent else {
            anyhow::bail!("LookupHandler can't handle {}", intent.kind());
        };
        if topic.is_empty() {
            return Ok(MISSING_TOPIC_RESPONSE.to_string());
        }

        info!("Looking up '{topic}'");
        Ok(ctx.encyclopedia.summarize(topic, ctx.summary_sentences).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::test_context;

    #[tokio::test]
    async fn test_summarizes_topic() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, doubles) = test_context(&dir);

        let intent = Intent::Lookup {
            topic: "alan turing".to_string(),
        };
        let response = LookupHandler.handle(ctx, &intent).await.unwrap();
        assert_eq!(response, "Summary of alan turing.");
        assert_eq!(
            *doubles.encyclopedia.topics.lock().unwrap(),
            vec![("alan turing".to_string(), 2)]
        );
    }

    #[tokio::test]
    async fn test_empty_topic_asks_back() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, doubles) = test_context(&dir);

        let intent = Intent::Lookup {
            topic: String::new(),
        };
        let response = LookupHandler.handle(ctx, &intent).await.unwrap();
        assert_eq!(response, MISSING_TOPIC_RESPONSE);
        assert!(doubles.encyclopedia.topics.lock().unwrap().is_empty());
    }
}
