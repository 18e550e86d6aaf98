//! # Features Layer
//!
//! Everything the intent handlers act on: reminders, notes, announcements and
//! the outside services (weather, encyclopedia, browser, jokes).

pub mod browser;
pub mod encyclopedia;
pub mod jokes;
pub mod notes;
pub mod notify;
pub mod reminders;
pub mod weather;

pub use browser::{BrowserOpener, SiteConfig, SystemBrowser};
pub use encyclopedia::{Encyclopedia, WikipediaClient};
pub use jokes::{JokeSource, LocalJokes};
pub use notes::NoteBook;
pub use notify::{ConsoleNotifier, MemoryNotifier, Notifier, SpeechNotifier};
pub use reminders::{Reminder, ReminderScheduler, ReminderStore};
pub use weather::{OpenWeatherClient, WeatherProvider};
