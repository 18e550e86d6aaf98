//! Intent handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for handler dispatch

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::IntentHandler;
use super::intent::IntentKind;

/// Registry mapping intent kinds to handlers
///
/// Multiple kinds can map to the same handler if they share logic. Matching
/// order lives in the intent table; the registry only answers "who handles this".
#[derive(Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<IntentKind, Arc<dyn IntentHandler>>,
}

impl HandlerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for its declared intent kinds
    pub fn register(&mut self, handler: Arc<dyn IntentHandler>) {
        for kind in handler.intents() {
            self.handlers.insert(*kind, Arc::clone(&handler));
        }
    }

    /// Get handler for an intent kind
    pub fn get(&self, kind: IntentKind) -> Option<Arc<dyn IntentHandler>> {
        self.handlers.get(&kind).cloned()
    }

    pub fn contains(&self, kind: IntentKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Number of registered intent kinds
    ///
    /// Note: This counts kinds, not unique handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::AssistantContext;
    use crate::commands::intent::Intent;
    use anyhow::Result;
    use async_trait::async_trait;

    // Mock handler for testing
    struct MockHandler {
        kinds: &'static [IntentKind],
    }

    #[async_trait]
    impl IntentHandler for MockHandler {
        fn intents(&self) -> &'static [IntentKind] {
            self.kinds
        }

        async fn handle(&self, _ctx: Arc<AssistantContext>, _intent: &Intent) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = HandlerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_register_single() {
        let mut registry = HandlerRegistry::new();
        registry.register(Arc::new(MockHandler {
            kinds: &[IntentKind::Joke],
        }));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(IntentKind::Joke));
        assert!(!registry.contains(IntentKind::Time));
    }

    #[test]
    fn test_registry_register_multiple_kinds() {
        let mut registry = HandlerRegistry::new();
        registry.register(Arc::new(MockHandler {
            kinds: &[IntentKind::Open, IntentKind::Search, IntentKind::Media],
        }));

        assert_eq!(registry.len(), 3);
        assert!(registry.get(IntentKind::Search).is_some());
        assert!(registry.get(IntentKind::Weather).is_none());
    }

    #[test]
    fn test_registry_default() {
        assert!(HandlerRegistry::default().is_empty());
    }
}
