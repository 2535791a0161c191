//! Guess evaluation against the secret word.

use std::fmt;

/// Typing this (any case) ends the session.
pub const QUIT_TOKEN: &str = "QUIT";

/// Result of evaluating one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Blank line; not an attempt.
    Empty,
    Quit,
    WrongLength { length: usize, required: usize },
    Correct { attempts: u32 },
    Miss { matches: usize },
}

impl Turn {
    /// Whether this turn counted as an attempt.
    pub fn is_attempt(self) -> bool {
        !matches!(self, Turn::Empty | Turn::Quit)
    }

    /// Outcome label written to the session log, if the turn is logged at all.
    pub fn outcome_label(self) -> Option<Outcome> {
        match self {
            Turn::Empty => None,
            Turn::Quit => Some(Outcome::UserExit),
            Turn::WrongLength { .. } => Some(Outcome::WrongLength),
            Turn::Correct { attempts } => Some(Outcome::Correct(attempts)),
            Turn::Miss { matches } => Some(Outcome::Matches(matches)),
        }
    }
}

/// Session log outcome labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    UserExit,
    WrongLength,
    Correct(u32),
    Matches(usize),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::UserExit => f.write_str("user_exit"),
            Outcome::WrongLength => f.write_str("wrong_length"),
            Outcome::Correct(attempts) => write!(f, "correct in {attempts}"),
            Outcome::Matches(count) => write!(f, "matches={count}"),
        }
    }
}

pub fn is_quit(input: &str) -> bool {
    matches_secret(input, QUIT_TOKEN)
}

/// Length in characters, which is what the player sees.
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// Letters match if either their uppercase or their lowercase forms agree.
fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}

/// Count positions where `guess` and `secret` hold the same letter, ignoring case.
///
/// Only positions present in both words are compared.
pub fn count_position_matches(guess: &str, secret: &str) -> usize {
    guess
        .chars()
        .zip(secret.chars())
        .filter(|&(g, s)| same_letter(g, s))
        .count()
}

/// Case-insensitive, character-by-character equality.
pub fn matches_secret(guess: &str, secret: &str) -> bool {
    word_length(guess) == word_length(secret)
        && count_position_matches(guess, secret) == word_length(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_france_vs_canada_has_no_matches() {
        assert_eq!(count_position_matches("FRANCE", "CANADA"), 0);
    }

    #[test]
    fn test_matches_ignore_case() {
        assert_eq!(count_position_matches("peru", "PERU"), 4);
        assert_eq!(count_position_matches("Chad", "chin"), 2);
        assert_eq!(count_position_matches("mali", "Cuba"), 0);
    }

    #[test]
    fn test_match_count_within_bounds() {
        let secret = "Germany";
        for guess in ["germany", "Xermany", "xxxxxxx", "GERMANX", "nygerma"] {
            let count = count_position_matches(guess, secret);
            assert!(count <= word_length(secret));
            assert_eq!(count == word_length(secret), matches_secret(guess, secret));
        }
    }

    #[test]
    fn test_non_ascii_letters() {
        assert_eq!(word_length("Côte"), 4);
        assert!(matches_secret("CÔTE", "côte"));
    }

    #[test]
    fn test_letters_equal_in_either_case_form() {
        assert!(matches_secret("ΟΔΟΣ", "οδος"));
        assert!(matches_secret("οδοσ", "οδος"));
        assert_eq!(count_position_matches("ς", "Σ"), 1);
        assert!(matches_secret("TÜRKIYE", "türkiye"));
    }

    #[test]
    fn test_matches_secret_requires_equal_length() {
        assert!(!matches_secret("Oman", "Omani"));
        assert!(matches_secret("oMaN", "Oman"));
    }

    #[test]
    fn test_quit_token_any_case() {
        assert!(is_quit("QUIT"));
        assert!(is_quit("quit"));
        assert!(is_quit("QuIt"));
        assert!(is_quit("qu\u{131}t"));
        assert!(!is_quit("quits"));
        assert!(!is_quit(""));
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::UserExit.to_string(), "user_exit");
        assert_eq!(Outcome::WrongLength.to_string(), "wrong_length");
        assert_eq!(Outcome::Correct(3).to_string(), "correct in 3");
        assert_eq!(Outcome::Matches(2).to_string(), "matches=2");
    }

    #[test]
    fn test_turn_attempts_and_labels() {
        assert!(!Turn::Empty.is_attempt());
        assert!(!Turn::Quit.is_attempt());
        assert!(Turn::Miss { matches: 0 }.is_attempt());
        assert_eq!(Turn::Empty.outcome_label(), None);
        assert_eq!(
            Turn::WrongLength { length: 3, required: 6 }.outcome_label(),
            Some(Outcome::WrongLength)
        );
    }
}
