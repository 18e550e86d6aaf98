//! # Notify Feature
//!
//! Sinks that announce assistant responses: console output, spoken audio through
//! an external TTS program, or an in-memory buffer.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Background playback through a configurable TTS command
//! - 1.0.0: Console and memory notifiers

use log::{debug, info, warn};
use std::sync::{Arc, Mutex};
use tokio::process::Command;

/// Announces a response and hands the same text back
///
/// Implementations must not block on audio playback.
pub trait Notifier: Send + Sync {
    fn notify(&self, text: &str) -> String;
}

/// Prints responses prefixed with the assistant's name
#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    label: String,
}

impl ConsoleNotifier {
    pub fn new(assistant_name: &str) -> Self {
        ConsoleNotifier {
            label: assistant_name.to_uppercase(),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, text: &str) -> String {
        println!("[{}]: {}", self.label, text);
        info!("Announced: {text}");
        text.to_string()
    }
}

/// Console output plus fire-and-forget speech through a TTS program
///
/// The program receives the text as its only argument, e.g. `say` or `espeak`.
#[derive(Debug, Clone)]
pub struct SpeechNotifier {
    console: ConsoleNotifier,
    program: String,
}

impl SpeechNotifier {
    pub fn new(assistant_name: &str, program: impl Into<String>) -> Self {
        SpeechNotifier {
            console: ConsoleNotifier::new(assistant_name),
            program: program.into(),
        }
    }
}

impl Notifier for SpeechNotifier {
    fn notify(&self, text: &str) -> String {
        let text = self.console.notify(text);
        if text.trim().is_empty() {
            return text;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime available, skipping speech playback");
            return text;
        };

        let program = self.program.clone();
        let spoken = text.clone();
        runtime.spawn(async move {
            match Command::new(&program).arg(&spoken).output().await {
                Ok(output) if output.status.success() => debug!("Finished speaking via {program}"),
                Ok(output) => warn!(
                    "Speech command {program} exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
                Err(e) => warn!("Speech error: failed to run {program}: {e}"),
            }
        });

        text
    }
}

/// Keeps every announcement in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything announced so far
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, text: &str) -> String {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(text.to_string());
        }
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_notifier_returns_text() {
        let notifier = ConsoleNotifier::new("jarvis");
        assert_eq!(notifier.notify("Hello! How can I help?"), "Hello! How can I help?");
    }

    #[test]
    fn test_memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_speech_notifier_without_runtime_still_returns() {
        let notifier = SpeechNotifier::new("jarvis", "definitely-not-a-real-tts-binary");
        assert_eq!(notifier.notify("It is 10:00 AM."), "It is 10:00 AM.");
    }

    #[tokio::test]
    async fn test_speech_notifier_does_not_wait_for_playback() {
        let notifier = SpeechNotifier::new("jarvis", "definitely-not-a-real-tts-binary");
        // A missing program only logs from the background task
        assert_eq!(notifier.notify("Reminder: call mom"), "Reminder: call mom");
    }
}
