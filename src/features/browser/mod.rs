//! # Browser Feature
//!
//! Opens web pages in the system browser and resolves spoken site names to URLs.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.1.0: Site shortcuts loadable from YAML
//! - 1.0.0: Initial release with built-in shortcuts

pub mod sites;

pub use sites::{google_search_url, youtube_search_url, Site, SiteConfig};

use log::{debug, warn};
use tokio::process::Command;

/// Opens a URL without waiting for the browser
pub trait BrowserOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Launches the platform's default URL handler
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    fn launcher(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime available, not opening {url}");
            return;
        };

        let url = url.to_string();
        runtime.spawn(async move {
            match Self::launcher(&url).status().await {
                Ok(status) if status.success() => debug!("Opened {url}"),
                Ok(status) => warn!("Browser launcher exited with {status} for {url}"),
                Err(e) => warn!("Failed to launch browser for {url}: {e}"),
            }
        });
    }
}
