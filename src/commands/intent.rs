//! Intent recognition
//!
//! An ordered rule table over normalized command text. Rules are tried top to
//! bottom and the first match wins, so a command containing several keywords
//! resolves to the earliest rule (e.g. "what time is the weather update" is a
//! time request).
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Response when the command is empty after normalization
pub const NO_COMMAND_RESPONSE: &str = "No command detected.";

/// Response when no rule matches
pub const FALLBACK_RESPONSE: &str =
    "Sorry, I didn't catch that. Try saying time, weather, Wikipedia, open, search, play, note, or remind.";

/// Message stored when a reminder command carries no text
pub const DEFAULT_REMINDER_MESSAGE: &str = "No message";

const FAREWELL_WORDS: &[&str] = &["exit", "quit", "stop", "goodbye", "bye"];

static GREETING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(hello|hi|hey)\b").expect("valid greeting regex"));
static WEATHER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"weather(?: in (?P<city>[\w\s]+))?").expect("valid weather regex")
});
static LOOKUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:who is|what is|tell me about|define|explain)\b\s*(?P<topic>.*)$")
        .expect("valid lookup regex")
});
static OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:open|go to)\s+(?P<query>.+)$").expect("valid open regex"));
static SEARCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:search|google)\s+(?P<query>.+)$").expect("valid search regex")
});
static MEDIA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:play|youtube)\s+(?P<query>.+)$").expect("valid media regex")
});
static NOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:note|remember)\s+(?P<text>.+)$").expect("valid note regex")
});
static REMIND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"remind me in (?P<minutes>\d+)\s*(?:minutes|minute|mins|min)\b\s*(?P<message>.*)")
        .expect("valid reminder regex")
});

/// Tag identifying which handler serves an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    Greeting,
    Wellbeing,
    Farewell,
    Time,
    Date,
    Weather,
    Lookup,
    Open,
    Search,
    Media,
    NoteSave,
    NoteList,
    Reminder,
    Joke,
}

impl IntentKind {
    pub fn name(&self) -> &'static str {
        match self {
            IntentKind::Greeting => "greeting",
            IntentKind::Wellbeing => "wellbeing",
            IntentKind::Farewell => "farewell",
            IntentKind::Time => "time",
            IntentKind::Date => "date",
            IntentKind::Weather => "weather",
            IntentKind::Lookup => "lookup",
            IntentKind::Open => "open",
            IntentKind::Search => "search",
            IntentKind::Media => "media",
            IntentKind::NoteSave => "note_save",
            IntentKind::NoteList => "note_list",
            IntentKind::Reminder => "reminder",
            IntentKind::Joke => "joke",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recognized command with its captured arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Wellbeing,
    Farewell,
    Time,
    Date,
    Weather { city: Option<String> },
    Lookup { topic: String },
    Open { query: String },
    Search { query: String },
    Media { query: String },
    NoteSave { text: String },
    NoteList,
    /// `minutes` is whatever was spoken; zero is rejected by the handler
    Reminder { minutes: i64, message: String },
    Joke,
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::Greeting => IntentKind::Greeting,
            Intent::Wellbeing => IntentKind::Wellbeing,
            Intent::Farewell => IntentKind::Farewell,
            Intent::Time => IntentKind::Time,
            Intent::Date => IntentKind::Date,
            Intent::Weather { .. } => IntentKind::Weather,
            Intent::Lookup { .. } => IntentKind::Lookup,
            Intent::Open { .. } => IntentKind::Open,
            Intent::Search { .. } => IntentKind::Search,
            Intent::Media { .. } => IntentKind::Media,
            Intent::NoteSave { .. } => IntentKind::NoteSave,
            Intent::NoteList => IntentKind::NoteList,
            Intent::Reminder { .. } => IntentKind::Reminder,
            Intent::Joke => IntentKind::Joke,
        }
    }
}

type Matcher = fn(&str) -> Option<Intent>;

/// One row of the priority table
pub struct IntentRule {
    pub kind: IntentKind,
    matcher: Matcher,
}

impl IntentRule {
    pub fn matches(&self, command: &str) -> Option<Intent> {
        (self.matcher)(command)
    }
}

/// Rules in priority order
pub static INTENT_RULES: &[IntentRule] = &[
    IntentRule { kind: IntentKind::Greeting, matcher: match_greeting },
    IntentRule { kind: IntentKind::Wellbeing, matcher: match_wellbeing },
    IntentRule { kind: IntentKind::Farewell, matcher: match_farewell },
    IntentRule { kind: IntentKind::Time, matcher: match_time },
    IntentRule { kind: IntentKind::Date, matcher: match_date },
    IntentRule { kind: IntentKind::Weather, matcher: match_weather },
    IntentRule { kind: IntentKind::Lookup, matcher: match_lookup },
    IntentRule { kind: IntentKind::Open, matcher: match_open },
    IntentRule { kind: IntentKind::Search, matcher: match_search },
    IntentRule { kind: IntentKind::Media, matcher: match_media },
    IntentRule { kind: IntentKind::NoteSave, matcher: match_note_save },
    IntentRule { kind: IntentKind::NoteList, matcher: match_note_list },
    IntentRule { kind: IntentKind::Reminder, matcher: match_reminder },
    IntentRule { kind: IntentKind::Joke, matcher: match_joke },
];

/// Match a normalized command against the rule table
pub fn parse_intent(command: &str) -> Option<Intent> {
    if command.is_empty() {
        return None;
    }
    INTENT_RULES.iter().find_map(|rule| rule.matches(command))
}

fn capture(re: &Regex, command: &str, group: &str) -> Option<String> {
    re.captures(command)
        .and_then(|caps| caps.name(group).map(|m| m.as_str().trim().to_string()))
}

fn match_greeting(command: &str) -> Option<Intent> {
    GREETING_RE.is_match(command).then_some(Intent::Greeting)
}

fn match_wellbeing(command: &str) -> Option<Intent> {
    command.contains("how are you").then_some(Intent::Wellbeing)
}

fn match_farewell(command: &str) -> Option<Intent> {
    FAREWELL_WORDS.contains(&command).then_some(Intent::Farewell)
}

fn match_time(command: &str) -> Option<Intent> {
    command.contains("time").then_some(Intent::Time)
}

fn match_date(command: &str) -> Option<Intent> {
    (command.contains("date") || command.contains("day")).then_some(Intent::Date)
}

fn match_weather(command: &str) -> Option<Intent> {
    let caps = WEATHER_RE.captures(command)?;
    let city = caps
        .name("city")
        .map(|m| m.as_str().trim().to_string())
        .filter(|c| !c.is_empty());
    Some(Intent::Weather { city })
}

fn match_lookup(command: &str) -> Option<Intent> {
    capture(&LOOKUP_RE, command, "topic").map(|topic| Intent::Lookup { topic })
}

fn match_open(command: &str) -> Option<Intent> {
    capture(&OPEN_RE, command, "query").map(|query| Intent::Open { query })
}

fn match_search(command: &str) -> Option<Intent> {
    capture(&SEARCH_RE, command, "query").map(|query| Intent::Search { query })
}

fn match_media(command: &str) -> Option<Intent> {
    capture(&MEDIA_RE, command, "query").map(|query| Intent::Media { query })
}

fn match_note_save(command: &str) -> Option<Intent> {
    capture(&NOTE_RE, command, "text").map(|text| Intent::NoteSave { text })
}

fn match_note_list(command: &str) -> Option<Intent> {
    (command.contains("list notes") || command.contains("show notes")).then_some(Intent::NoteList)
}

fn match_reminder(command: &str) -> Option<Intent> {
    let caps = REMIND_RE.captures(command)?;
    // Out-of-range numbers are kept as "too large" and rejected when scheduling
    let minutes = caps["minutes"].parse::<i64>().unwrap_or(i64::MAX);
    let message = caps
        .name("message")
        .map(|m| m.as_str().trim())
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_REMINDER_MESSAGE)
        .to_string();
    Some(Intent::Reminder { minutes, message })
}

fn match_joke(command: &str) -> Option<Intent> {
    command.contains("joke").then_some(Intent::Joke)
}
