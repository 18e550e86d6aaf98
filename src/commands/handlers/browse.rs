//! Browser handlers
//!
//! Handles: open, search, media
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
use crate::features::browser::{google_search_url, youtube_search_url};

/// Handler for commands that open pages in the browser
pub struct BrowseHandler;

#[async_trait]
impl IntentHandler for BrowseHandler {
    fn intents(&self) -> &'static [IntentKind] {
        &[IntentKind::Open, IntentKind::Search, IntentKind::Media]
    }

    async fn handle(&self, ctx: Arc<AssistantContext>, intent: &Intent) -> Result<String> {
        match intent {
            Intent::Open { query } | Intent::Search { query } => {
                Ok(Self::open_site_or_search(&ctx, query))
            }
            Intent::Media { query } => {
                let url = youtube_search_url(query);
                info!("Opening YouTube search: {url}");
                ctx.browser.open(&url);
                Ok(format!("Looking for {query} on YouTube."))
            }
            other => anyhow::bail!("BrowseHandler can't handle {}", other.kind()),
        }
    }
}

impl BrowseHandler {
    /// Open a known site named in `query`, otherwise run a web search for it
    fn open_site_or_search(ctx: &AssistantContext, query: &str) -> String {
        if let Some(site) = ctx.sites.resolve(query) {
            info!("Opening {} ({})", site.name, site.url);
            ctx.browser.open(&site.url);
            return format!("Opening {}.", site.name);
        }

        let url = google_search_url(query);
        info!("Searching the web: {url}");
        ctx.browser.open(&url);
        format!("Searching the web for {query}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::test_context;

    #[tokio::test]
    async fn test_open_known_site() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, doubles) = test_context(&dir);

        let intent = Intent::Open {
            query: "github".to_string(),
        };
        assert_eq!(BrowseHandler.handle(ctx, &intent).await.unwrap(), "Opening github.");
        assert_eq!(*doubles.browser.urls.lock().unwrap(), vec!["https://github.com"]);
    }

    #[tokio::test]
    async fn test_unknown_site_falls_back_to_search() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, doubles) = test_context(&dir);

        let intent = Intent::Search {
            query: "rust lifetimes".to_string(),
        };
        assert_eq!(
            BrowseHandler.handle(ctx, &intent).await.unwrap(),
            "Searching the web for rust lifetimes."
        );
        assert_eq!(
            *doubles.browser.urls.lock().unwrap(),
            vec!["https://www.google.com/search?q=rust%20lifetimes"]
        );
    }

    #[tokio::test]
    async fn test_media_search() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, doubles) = test_context(&dir);

        let intent = Intent::Media {
            query: "funny cats".to_string(),
        };
        assert_eq!(
            BrowseHandler.handle(ctx, &intent).await.unwrap(),
            "Looking for funny cats on YouTube."
        );
        assert_eq!(
            *doubles.browser.urls.lock().unwrap(),
            vec!["https://www.youtube.com/results?search_query=funny%20cats"]
        );
    }
}
