//! # Site Shortcut Configuration
//!
//! YAML list of spoken site names and the pages they open.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration containing all shortcuts, checked in order
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub sites: Vec<Site>,
}

/// A single shortcut
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Site {
    /// Word that selects this site when it appears in a command
    pub name: String,
    pub url: String,
}

impl SiteConfig {
    /// Load shortcuts from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: SiteConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all shortcuts in the configuration
    pub fn validate(&self) -> Result<()> {
        for site in &self.sites {
            if site.name.is_empty() || site.name != site.name.to_lowercase() {
                return Err(anyhow::anyhow!(
                    "Site name must be non-empty and lowercase: '{}'",
                    site.name
                ));
            }
            if !site.url.starts_with("http://") && !site.url.starts_with("https://") {
                return Err(anyhow::anyhow!(
                    "Site '{}' URL must start with http:// or https://",
                    site.name
                ));
            }
        }
        Ok(())
    }

    /// First shortcut whose name appears anywhere in `text`
    pub fn resolve(&self, text: &str) -> Option<&Site> {
        self.sites.iter().find(|site| text.contains(site.name.as_str()))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let site = |name: &str, url: &str| Site {
            name: name.to_string(),
            url: url.to_string(),
        };
        SiteConfig {
            sites: vec![
                site("youtube", "https://www.youtube.com"),
                site("gmail", "https://mail.google.com"),
                site("google", "https://www.google.com"),
                site("github", "https://github.com"),
                site("stackoverflow", "https://stackoverflow.com"),
            ],
        }
    }
}

pub fn google_search_url(query: &str) -> String {
    format!("https://www.google.com/search?q={}", urlencoding::encode(query))
}

pub fn youtube_search_url(query: &str) -> String {
    format!(
        "https://www.youtube.com/results?search_query={}",
        urlencoding::encode(query)
    )
}
