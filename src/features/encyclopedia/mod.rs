//! # Encyclopedia Feature
//!
//! Short Wikipedia summaries with auto-suggest, redirects and disambiguation.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use std::time::Duration;

/// HTTP timeout for encyclopedia lookups (seconds)
const LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Most options listed for an ambiguous topic
const MAX_OPTIONS: usize = 5;

pub const NOT_FOUND_MESSAGE: &str = "I couldn't find a relevant article.";

/// Summarizes a topic in a few sentences
///
/// Every outcome, including failures, is returned as speakable text.
#[async_trait]
pub trait Encyclopedia: Send + Sync {
    async fn summarize(&self, topic: &str, sentences: u32) -> String;
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    pageprops: Option<PageProps>,
    #[serde(default)]
    links: Vec<Link>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    disambiguation: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Link {
    title: String,
}

#[derive(Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    base_url: String,
}

impl WikipediaClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(LOOKUP_TIMEOUT_SECS))
            .user_agent(concat!("jarvis-assistant/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(WikipediaClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self) -> String {
        format!("{}/w/api.php", self.base_url)
    }

    /// Titles suggested for a free-text topic, best match first
    async fn suggest(&self, topic: &str) -> Result<Vec<String>> {
        let limit = MAX_OPTIONS.to_string();
        let body: serde_json::Value = self
            .http
            .get(self.api_url())
            .query(&[
                ("action", "opensearch"),
                ("format", "json"),
                ("namespace", "0"),
                ("limit", limit.as_str()),
                ("search", topic),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(body
            .get(1)
            .and_then(|titles| titles.as_array())
            .map(|titles| {
                titles
                    .iter()
                    .filter_map(|t| t.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn page(&self, title: &str, sentences: u32) -> Result<Option<Page>> {
        let sentences = sentences.max(1).to_string();
        let limit = MAX_OPTIONS.to_string();
        let response: QueryResponse = self
            .http
            .get(self.api_url())
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("redirects", "1"),
                ("prop", "extracts|pageprops|links"),
                ("explaintext", "1"),
                ("exsentences", sentences.as_str()),
                ("ppprop", "disambiguation"),
                ("plnamespace", "0"),
                ("pllimit", limit.as_str()),
                ("titles", title),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.query.and_then(|q| q.pages.into_iter().next()))
    }

    async fn lookup(&self, topic: &str, sentences: u32) -> Result<String> {
        let suggestions = self.suggest(topic).await?;
        let Some(title) = suggestions.first() else {
            return Ok(NOT_FOUND_MESSAGE.to_string());
        };
        debug!("Resolved '{topic}' to article '{title}'");

        let Some(page) = self.page(title, sentences).await? else {
            return Ok(NOT_FOUND_MESSAGE.to_string());
        };
        if page.missing {
            return Ok(NOT_FOUND_MESSAGE.to_string());
        }

        let ambiguous = page
            .pageprops
            .as_ref()
            .is_some_and(|p| p.disambiguation.is_some());
        if ambiguous {
            let mut options: Vec<String> = page.links.into_iter().map(|l| l.title).collect();
            if options.is_empty() {
                options = suggestions.iter().skip(1).cloned().collect();
            }
            options.truncate(MAX_OPTIONS);
            return Ok(format!(
                "That's ambiguous. Options include: {}.",
                options.join(", ")
            ));
        }

        match page.extract.map(|e| e.trim().to_string()) {
            Some(extract) if !extract.is_empty() => Ok(extract),
            _ => Ok(NOT_FOUND_MESSAGE.to_string()),
        }
    }
}

#[async_trait]
impl Encyclopedia for WikipediaClient {
    async fn summarize(&self, topic: &str, sentences: u32) -> String {
        match self.lookup(topic, sentences).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Wikipedia lookup for '{topic}' failed: {e}");
                format!("Wikipedia error: {e}")
            }
        }
    }
}
