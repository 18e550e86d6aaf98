// Core layer - configuration and text normalization
pub mod core;

// Features layer - reminders, notes, notifier and outside services
pub mod features;

// Application layer - intents, handlers and routing
pub mod commands;

// HTTP facade
pub mod http;

pub use commands::{AssistantContext, Intent, IntentKind, IntentRouter, Routed};
pub use core::Config;

pub use features::{
    // Notifications
    ConsoleNotifier, MemoryNotifier, Notifier, SpeechNotifier,
    // Reminders
    Reminder, ReminderScheduler, ReminderStore,
    // Notes
    NoteBook,
    // Outside services
    BrowserOpener, Encyclopedia, JokeSource, WeatherProvider,
};
