//! Reminder entity and timestamp parsing

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// Formats accepted for due times without an explicit offset
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// A pending reminder
///
/// On the wire (HTTP and the reminder file) `message` is `title` and `due_at`
/// is `time`, matching the reminder API payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    #[serde(rename = "title", alias = "message")]
    pub message: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(rename = "time", alias = "due_at")]
    pub due_at: DateTime<Local>,
}

impl Reminder {
    /// Create a reminder with a fresh id
    pub fn new(message: impl Into<String>, note: Option<String>, due_at: DateTime<Local>) -> Self {
        Reminder {
            id: next_id(),
            message: message.into(),
            note: note.filter(|n| !n.trim().is_empty()),
            due_at,
        }
    }

    pub fn is_due(&self, now: DateTime<Local>) -> bool {
        self.due_at <= now
    }

    /// Parse one line of the reminder file
    ///
    /// Accepts the JSON object form and the legacy `timestamp | message` form.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if line.starts_with('{') {
            return serde_json::from_str::<Reminder>(line)
                .ok()
                .filter(|r| !r.message.trim().is_empty());
        }

        let (due, message) = line.split_once(" | ")?;
        let due_at = parse_due_time(due)?;
        let message = message.trim();
        if message.is_empty() {
            return None;
        }
        Some(Reminder {
            id: due_at.timestamp_millis(),
            message: message.to_string(),
            note: None,
            due_at,
        })
    }
}

/// Spoken text for a reminder that came due
pub fn announcement(reminder: &Reminder) -> String {
    format!("Reminder: {}", reminder.message)
}

/// Parse a due time given as RFC 3339 or as a local date-time without offset
pub fn parse_due_time(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }

    NAIVE_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(raw, fmt)
            .ok()
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
    })
}

/// Millisecond-clock id, bumped when two reminders land in the same millisecond
fn next_id() -> i64 {
    let now = Local::now().timestamp_millis();
    let previous = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(if now > last { now } else { last + 1 })
        })
        .unwrap_or(now);
    if now > previous {
        now
    } else {
        previous + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeDelta, Timelike};

    #[test]
    fn test_ids_are_strictly_increasing() {
        let due = Local::now();
        let a = Reminder::new("a", None, due);
        let b = Reminder::new("b", None, due);
        let c = Reminder::new("c", None, due);
        assert!(a.id < b.id);
        assert!(b.id < c.id);
    }

    #[test]
    fn test_blank_note_is_dropped() {
        let r = Reminder::new("call mom", Some("  ".to_string()), Local::now());
        assert!(r.note.is_none());
    }

    #[test]
    fn test_json_line_roundtrip_uses_wire_names() {
        let r = Reminder::new("water plants", Some("balcony".to_string()), Local::now());
        let line = serde_json::to_string(&r).unwrap();
        assert!(line.contains("\"title\":\"water plants\""));
        assert!(line.contains("\"time\":"));
        assert_eq!(Reminder::from_line(&line), Some(r));
    }

    #[test]
    fn test_legacy_line_is_read() {
        let r = Reminder::from_line("2030-01-02T03:04:05.123456 | stretch your legs\n").unwrap();
        assert_eq!(r.message, "stretch your legs");
        assert_eq!(r.due_at.year(), 2030);
        assert_eq!(r.due_at.hour(), 3);
        assert!(r.note.is_none());
    }

    #[test]
    fn test_corrupted_lines_are_rejected() {
        assert!(Reminder::from_line("").is_none());
        assert!(Reminder::from_line("not a reminder").is_none());
        assert!(Reminder::from_line("yesterday | call mom").is_none());
        assert!(Reminder::from_line("{\"id\": 1, \"title\": \"x\"").is_none());
        assert!(Reminder::from_line("2030-01-02T03:04:05 |   ").is_none());
    }

    #[test]
    fn test_parse_due_time_formats() {
        assert!(parse_due_time("2030-05-06T07:08:09+02:00").is_some());
        assert!(parse_due_time("2030-05-06T07:08").is_some());
        assert!(parse_due_time("2030-05-06 07:08:09").is_some());
        assert!(parse_due_time("tomorrow").is_none());
        assert!(parse_due_time("").is_none());
    }

    #[test]
    fn test_is_due() {
        let now = Local::now();
        let past = Reminder::new("past", None, now - TimeDelta::minutes(1));
        let future = Reminder::new("future", None, now + TimeDelta::minutes(1));
        assert!(past.is_due(now));
        assert!(!future.is_due(now));
    }

    #[test]
    fn test_announcement() {
        let r = Reminder::new("call mom", None, Local::now());
        assert_eq!(announcement(&r), "Reminder: call mom");
    }
}
