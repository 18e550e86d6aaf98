//! # Command System
//!
//! Turns normalized text into intents and dispatches them to handlers.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Ordered intent table separated from handler dispatch
//! - 1.0.0: Handler trait, context, registry and router

pub mod context;
pub mod handler;
pub mod handlers;
pub mod intent;
pub mod registry;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;

pub use context::AssistantContext;
pub use handler::IntentHandler;
pub use intent::{
    parse_intent, Intent, IntentKind, IntentRule, FALLBACK_RESPONSE, INTENT_RULES,
    NO_COMMAND_RESPONSE,
};
pub use registry::HandlerRegistry;
pub use router::{IntentRouter, Routed};
