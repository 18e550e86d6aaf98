//! Intent router: normalized text in, announced response out
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use log::{debug, error, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::context::AssistantContext;
use super::handlers::create_all_handlers;
use super::intent::{parse_intent, IntentKind, FALLBACK_RESPONSE, NO_COMMAND_RESPONSE};
use super::registry::HandlerRegistry;
use crate::core::text::{normalize, prepare_command};

/// Outcome of routing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routed {
    /// Matched intent, `None` for empty or unrecognized commands
    pub kind: Option<IntentKind>,
    pub response: String,
}

/// Routes commands to their handlers and announces every response
#[derive(Clone)]
pub struct IntentRouter {
    ctx: Arc<AssistantContext>,
    registry: HandlerRegistry,
}

impl IntentRouter {
    /// Create a router with every built-in handler registered
    pub fn new(ctx: Arc<AssistantContext>) -> Self {
        let mut registry = HandlerRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }
        debug!("Registered handlers for {} intent kinds", registry.len());
        Self { ctx, registry }
    }

    pub fn context(&self) -> &Arc<AssistantContext> {
        &self.ctx
    }

    /// Route a command and return the announced response
    pub async fn route(&self, command: &str) -> String {
        self.dispatch(command).await.response
    }

    /// Strip the wake word from raw speech/console text, then route it
    pub async fn handle_text(&self, raw: &str) -> Routed {
        let command = prepare_command(raw, &self.ctx.wake_word);
        self.dispatch(&command).await
    }

    /// Route a command, reporting which intent answered it
    pub async fn dispatch(&self, command: &str) -> Routed {
        let command = normalize(command);
        let request_id = Uuid::new_v4();

        if command.is_empty() {
            debug!("[{request_id}] Empty command");
            return Routed {
                kind: None,
                response: NO_COMMAND_RESPONSE.to_string(),
            };
        }

        let Some(intent) = parse_intent(&command) else {
            info!("[{request_id}] No intent matched '{command}'");
            return Routed {
                kind: None,
                response: self.ctx.notifier.notify(FALLBACK_RESPONSE),
            };
        };

        let kind = intent.kind();
        info!("[{request_id}] 🎯 Routing '{command}' as {kind}");

        let Some(handler) = self.registry.get(kind) else {
            warn!("[{request_id}] No handler registered for {kind}");
            return Routed {
                kind: None,
                response: self.ctx.notifier.notify(FALLBACK_RESPONSE),
            };
        };

        let response = match handler.handle(Arc::clone(&self.ctx), &intent).await {
            Ok(text) => text,
            Err(e) => {
                error!("[{request_id}] ❌ {kind} failed: {e:#}");
                format!("Sorry, I couldn't do that: {e}")
            }
        };
        debug!("[{request_id}] ✅ {kind} answered ({} chars)", response.len());

        Routed {
            kind: Some(kind),
            response: self.ctx.notifier.notify(&response),
        }
    }
}
