//! Intent handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for modular intent handling

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::context::AssistantContext;
use super::intent::{Intent, IntentKind};

/// Trait for intent handlers
///
/// Each handler serves one or more intent kinds. Handlers are registered with a
/// HandlerRegistry and dispatched by the kind of the recognized intent.
///
/// # Example
///
/// ```ignore
/// pub struct JokeHandler;
///
/// #[async_trait]
/// impl IntentHandler for JokeHandler {
///     fn intents(&self) -> &'static [IntentKind] {
///         &[IntentKind::Joke]
///     }
///
///     async fn handle(&self, ctx: Arc<AssistantContext>, _intent: &Intent) -> Result<String> {
///         Ok(ctx.jokes.joke())
///     }
/// }
/// ```
#[async_trait]
pub trait IntentHandler: Send + Sync {
    /// Intent kind(s) this handler serves
    fn intents(&self) -> &'static [IntentKind];

    /// Produce the response text for a recognized intent
    ///
    /// Errors are reserved for local failures such as a note that can't be
    /// written; remote service problems are reported inside the returned text.
    async fn handle(&self, ctx: Arc<AssistantContext>, intent: &Intent) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::test_context;

    struct EchoHandler;

    #[async_trait]
    impl IntentHandler for EchoHandler {
        fn intents(&self) -> &'static [IntentKind] {
            &[IntentKind::Joke]
        }

        async fn handle(&self, _ctx: Arc<AssistantContext>, intent: &Intent) -> Result<String> {
            Ok(intent.kind().name().to_string())
        }
    }

    #[tokio::test]
    async fn test_handler_as_trait_object() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _) = test_context(&dir);

        let handler: Arc<dyn IntentHandler> = Arc::new(EchoHandler);
        assert_eq!(handler.intents(), &[IntentKind::Joke]);
        assert_eq!(handler.handle(ctx, &Intent::Joke).await.unwrap(), "joke");
    }
}
