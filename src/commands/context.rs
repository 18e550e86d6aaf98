//! Shared context for intent handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Explicitly constructed services replace process-wide singletons

use anyhow::Result;
use log::{error, info};
use std::sync::Arc;

use crate::core::Config;
use crate::features::{
    BrowserOpener, ConsoleNotifier, Encyclopedia, JokeSource, LocalJokes, NoteBook, Notifier,
    OpenWeatherClient, ReminderScheduler, ReminderStore, SiteConfig, SpeechNotifier,
    SystemBrowser, WeatherProvider, WikipediaClient,
};

/// Sentences requested for encyclopedia summaries
pub const DEFAULT_SUMMARY_SENTENCES: u32 = 2;

/// Shared context for all intent handlers
///
/// Contains every service a handler may touch:
/// - Notifier for announcing responses
/// - ReminderScheduler for timed reminders
/// - NoteBook for saved notes
/// - Weather, encyclopedia, browser and joke collaborators
/// - Site shortcuts for open/search commands
#[derive(Clone)]
pub struct AssistantContext {
    pub notifier: Arc<dyn Notifier>,
    pub reminders: ReminderScheduler,
    pub notes: NoteBook,
    pub weather: Arc<dyn WeatherProvider>,
    pub encyclopedia: Arc<dyn Encyclopedia>,
    pub browser: Arc<dyn BrowserOpener>,
    pub jokes: Arc<dyn JokeSource>,
    pub sites: SiteConfig,
    pub wake_word: String,
    pub summary_sentences: u32,
    pub start_time: std::time::Instant,
}

impl AssistantContext {
    /// Create an AssistantContext with the given services
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        notifier: Arc<dyn Notifier>,
        reminders: ReminderScheduler,
        notes: NoteBook,
        weather: Arc<dyn WeatherProvider>,
        encyclopedia: Arc<dyn Encyclopedia>,
        browser: Arc<dyn BrowserOpener>,
        jokes: Arc<dyn JokeSource>,
        wake_word: impl Into<String>,
    ) -> Self {
        Self {
            notifier,
            reminders,
            notes,
            weather,
            encyclopedia,
            browser,
            jokes,
            sites: SiteConfig::default(),
            wake_word: wake_word.into(),
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            start_time: std::time::Instant::now(),
        }
    }

    /// Replace the built-in site shortcuts
    pub fn with_sites(mut self, sites: SiteConfig) -> Self {
        self.sites = sites;
        self
    }

    /// Wire the production services described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let notifier: Arc<dyn Notifier> = match &config.tts_command {
            Some(program) => {
                info!("🔊 Speaking responses through '{program}'");
                Arc::new(SpeechNotifier::new(&config.assistant_name, program.clone()))
            }
            None => Arc::new(ConsoleNotifier::new(&config.assistant_name)),
        };

        let store = Arc::new(ReminderStore::new(config.reminders_path.clone()));
        let reminders = ReminderScheduler::new(store, notifier.clone(), config.sweep_interval);

        let weather = OpenWeatherClient::new(
            config.openweather_base_url.clone(),
            config.openweather_api_key.clone(),
            config.default_city.clone(),
            config.country_code.clone(),
        )?;
        let encyclopedia = WikipediaClient::new(config.wikipedia_base_url.clone())?;

        let context = Self::new(
            notifier,
            reminders,
            NoteBook::new(config.notes_path.clone()),
            Arc::new(weather),
            Arc::new(encyclopedia),
            Arc::new(SystemBrowser),
            Arc::new(LocalJokes),
            config.assistant_name.clone(),
        );

        Ok(context.with_sites(load_sites(config)))
    }
}

/// Site shortcuts from the configured YAML file, or the built-in list
fn load_sites(config: &Config) -> SiteConfig {
    let path = &config.sites_config_path;
    match SiteConfig::load(path) {
        Ok(sites) => {
            info!("📄 Loaded {} site shortcut(s) from {}", sites.sites.len(), path.display());
            sites
        }
        Err(e) => {
            if path.exists() {
                error!("❌ Failed to load site shortcuts from {}: {e}", path.display());
            } else {
                info!("📄 No site config at {} - using built-in shortcuts", path.display());
            }
            SiteConfig::default()
        }
    }
}
