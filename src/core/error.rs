//! Error taxonomy for card loading and session play.
//!
//! Load-time failures abort the whole load atomically and carry the 1-based
//! line number of the first offending line. Play-time failures are returned
//! as typed results and never mutate existing state.

use thiserror::Error;

use super::ruleset::LanguageCode;

/// Why a single card line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    /// The line is structurally malformed (bad ID shape, missing fields,
    /// duplicate words).
    #[error("{0}")]
    Format(String),

    /// The derived or explicit language is not configured.
    #[error("unknown language '{code}', allowed: {allowed}")]
    UnknownLanguage { code: String, allowed: String },

    /// Word count differs from the rule's required count.
    #[error("{language} requires exactly {expected} words, received {received}")]
    WordCountMismatch {
        language: String,
        expected: usize,
        received: usize,
    },

    /// A word is not a member of the configured word bank.
    #[error("word '{word}' is not in the {language} word bank")]
    UnknownWord { word: String, language: LanguageCode },
}

/// Session-level failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A card line failed validation; the whole load is aborted.
    #[error("line {line}: {reason}")]
    InvalidCard { line: usize, reason: CardError },

    /// The input contained no card lines at all.
    #[error("no cards found in input")]
    EmptyDeck,

    /// Not enough cards to give every player at least one.
    #[error("not enough cards for {players} players ({cards} available)")]
    InsufficientCards { cards: usize, players: usize },

    /// A language bucket is too small for one-per-language distribution.
    #[error("not enough {language} cards for {players} players ({cards} available)")]
    InsufficientLanguageCards {
        language: LanguageCode,
        cards: usize,
        players: usize,
    },

    /// No player owning at least one card is registered.
    #[error("no players with cards registered")]
    NoPlayers,

    /// The operation requires an active session.
    #[error("session is not active")]
    NotActive,

    /// `start` was called while a round is already running.
    #[error("session is already active")]
    AlreadyActive,

    /// The called word is not legal for the active language.
    #[error("word '{word}' is not valid for language {language}")]
    InvalidWord { word: String, language: LanguageCode },

    /// Unrecognized distribution policy name.
    #[error("unknown distribution policy '{0}'")]
    InvalidPolicy(String),

    /// Unexpected internal fault; the previous session state is intact.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_card_message() {
        let err = SessionError::InvalidCard {
            line: 3,
            reason: CardError::WordCountMismatch {
                language: "Español".to_string(),
                expected: 24,
                received: 23,
            },
        };
        assert_eq!(
            err.to_string(),
            "line 3: Español requires exactly 24 words, received 23"
        );
    }

    #[test]
    fn test_unknown_language_message() {
        let err = CardError::UnknownLanguage {
            code: "XX".to_string(),
            allowed: "EN, SP".to_string(),
        };
        assert_eq!(err.to_string(), "unknown language 'XX', allowed: EN, SP");
    }

    #[test]
    fn test_invalid_word_message() {
        let err = SessionError::InvalidWord {
            word: "NOPE".to_string(),
            language: LanguageCode::new("SP").unwrap(),
        };
        assert_eq!(err.to_string(), "word 'NOPE' is not valid for language SP");
    }

    #[test]
    fn test_insufficient_language_cards_message() {
        let err = SessionError::InsufficientLanguageCards {
            language: LanguageCode::new("PT").unwrap(),
            cards: 2,
            players: 3,
        };
        assert_eq!(
            err.to_string(),
            "not enough PT cards for 3 players (2 available)"
        );
    }
}
