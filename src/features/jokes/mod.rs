//! # Jokes Feature
//!
//! Offline programmer jokes.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true

use rand::seq::IndexedRandom;

pub trait JokeSource: Send + Sync {
    fn joke(&self) -> String;
}

const JOKES: &[&str] = &[
    "There are 10 types of people: those who understand binary and those who don't.",
    "A SQL query walks into a bar, goes up to two tables and asks: can I join you?",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "I would tell you a UDP joke, but you might not get it.",
    "To understand recursion, you must first understand recursion.",
    "Debugging is like being the detective in a crime movie where you are also the murderer.",
    "There's no place like 127.0.0.1.",
    "Why did the developer go broke? Because he used up all his cache.",
    "Knock knock. Race condition. Who's there?",
    "A programmer's partner says: go to the store and buy a loaf of bread, and if they have eggs, buy a dozen. The programmer returns with twelve loaves.",
    "The two hardest problems in computer science are cache invalidation, naming things, and off-by-one errors.",
    "Why do Java developers wear glasses? Because they can't C sharp.",
];

/// Picks a random joke from a built-in list
#[derive(Debug, Clone, Default)]
pub struct LocalJokes;

impl JokeSource for LocalJokes {
    fn joke(&self) -> String {
        JOKES
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or("I'm all out of jokes.")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joke_comes_from_list() {
        let jokes = LocalJokes;
        for _ in 0..20 {
            assert!(JOKES.contains(&jokes.joke().as_str()));
        }
    }
}
