//! Test doubles for the outside collaborators

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::context::AssistantContext;
use crate::features::{
    BrowserOpener, Encyclopedia, JokeSource, MemoryNotifier, NoteBook, ReminderScheduler,
    ReminderStore, WeatherProvider,
};

pub const TEST_JOKE: &str = "I told a UDP joke once.";

#[derive(Default)]
pub struct StubWeather {
    pub cities: Mutex<Vec<Option<String>>>,
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn current(&self, city: Option<&str>) -> String {
        self.cities.lock().unwrap().push(city.map(str::to_string));
        format!("Sunny in {}.", city.unwrap_or("the default city"))
    }
}

#[derive(Default)]
pub struct StubEncyclopedia {
    pub topics: Mutex<Vec<(String, u32)>>,
}

#[async_trait]
impl Encyclopedia for StubEncyclopedia {
    async fn summarize(&self, topic: &str, sentences: u32) -> String {
        self.topics.lock().unwrap().push((topic.to_string(), sentences));
        format!("Summary of {topic}.")
    }
}

#[derive(Default)]
pub struct RecordingBrowser {
    pub urls: Mutex<Vec<String>>,
}

impl BrowserOpener for RecordingBrowser {
    fn open(&self, url: &str) {
        self.urls.lock().unwrap().push(url.to_string());
    }
}

pub struct FixedJoke;

impl JokeSource for FixedJoke {
    fn joke(&self) -> String {
        TEST_JOKE.to_string()
    }
}

/// Handles on every double wired into a test context
pub struct Doubles {
    pub notifier: MemoryNotifier,
    pub weather: Arc<StubWeather>,
    pub encyclopedia: Arc<StubEncyclopedia>,
    pub browser: Arc<RecordingBrowser>,
}

/// A context whose files live in `dir` and whose services are doubles
pub fn test_context(dir: &tempfile::TempDir) -> (Arc<AssistantContext>, Doubles) {
    let notifier = MemoryNotifier::new();
    let weather = Arc::new(StubWeather::default());
    let encyclopedia = Arc::new(StubEncyclopedia::default());
    let browser = Arc::new(RecordingBrowser::default());

    let store = Arc::new(ReminderStore::new(dir.path().join("reminders.jsonl")));
    let reminders =
        ReminderScheduler::new(store, Arc::new(notifier.clone()), Duration::from_secs(30));

    let ctx = AssistantContext::new(
        Arc::new(notifier.clone()),
        reminders,
        NoteBook::new(dir.path().join("notes.txt")),
        weather.clone(),
        encyclopedia.clone(),
        browser.clone(),
        Arc::new(FixedJoke),
        "jarvis",
    );

    (
        Arc::new(ctx),
        Doubles {
            notifier,
            weather,
            encyclopedia,
            browser,
        },
    )
}
