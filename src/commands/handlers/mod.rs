//! Per-intent handler implementations
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Add BrowseHandler (open, search, media) and LookupHandler
//! - 1.0.0: UtilityHandler, WeatherHandler, NotesHandler, RemindHandler

pub mod browse;
pub mod lookup;
pub mod notes;
pub mod remind;
pub mod utility;
pub mod weather;

use std::sync::Arc;

use super::handler::IntentHandler;

/// Create all registered intent handlers
///
/// Returns a vector of handlers ready to be registered with HandlerRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn IntentHandler>> {
    vec![
        Arc::new(utility::UtilityHandler),
        Arc::new(weather::WeatherHandler),
        Arc::new(lookup::LookupHandler),
        Arc::new(browse::BrowseHandler),
        Arc::new(notes::NotesHandler),
        Arc::new(remind::RemindHandler),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::intent::INTENT_RULES;
    use crate::commands::registry::HandlerRegistry;

    #[test]
    fn test_every_intent_has_a_handler() {
        let mut registry = HandlerRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }
        for rule in INTENT_RULES {
            assert!(registry.contains(rule.kind), "no handler for {}", rule.kind);
        }
        assert_eq!(registry.len(), INTENT_RULES.len());
    }
}
