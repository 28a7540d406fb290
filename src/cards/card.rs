//! The card entity: a fixed set of sorted words tracked toward a win.
//!
//! A card's word list is fixed at validation time and kept sorted ascending
//! so that [`Card::mark`] can locate a called word with an iterative binary
//! search in O(log n). Marked progress (`marked`/`hits`) is the only mutable
//! state and changes exclusively through `mark`.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::error::CardError;
use crate::core::ruleset::LanguageCode;

/// Card identifier, stored uppercase.
///
/// Canonical IDs are a 2-letter language prefix plus 6 digits ("SP000001"),
/// but explicit-language input lines may carry any non-empty token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CardId(String);

impl CardId {
    /// Create an ID from a raw token, uppercasing it.
    ///
    /// Rejects empty tokens and tokens containing separator characters.
    pub fn new(raw: &str) -> Result<Self, CardError> {
        if raw.is_empty() {
            return Err(CardError::Format("card ID must not be empty".to_string()));
        }
        if raw.chars().any(|c| c.is_whitespace() || c == '|' || c == ',') {
            return Err(CardError::Format(format!(
                "card ID '{raw}' contains separator characters"
            )));
        }
        Ok(Self(raw.to_uppercase()))
    }

    /// The ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of marking a word against a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The word is on the card and was newly marked.
    Marked,
    /// The word was already marked; `hits` is unchanged.
    AlreadyMarked,
    /// The word is not on this card.
    NotOnCard,
}

/// A bingo card: language-tagged sorted word set plus marked progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    language: LanguageCode,
    words: Vec<String>,
    marked: FxHashSet<String>,
    hits: usize,
}

impl Card {
    /// Create a card. Words are uppercased and sorted ascending; the
    /// validator has already checked count, uniqueness, and bank membership.
    #[must_use]
    pub fn new(id: CardId, language: LanguageCode, words: Vec<String>) -> Self {
        let mut words: Vec<String> = words.into_iter().map(|w| w.to_uppercase()).collect();
        words.sort();

        Self {
            id,
            language,
            words,
            marked: FxHashSet::default(),
            hits: 0,
        }
    }

    /// The card's ID.
    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// The card's language.
    #[must_use]
    pub fn language(&self) -> LanguageCode {
        self.language
    }

    /// The sorted word list.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Total number of words on the card.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct marked words.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Has this word already been marked?
    #[must_use]
    pub fn is_marked(&self, word: &str) -> bool {
        self.marked.contains(&word.to_uppercase())
    }

    /// Marked words, sorted ascending.
    #[must_use]
    pub fn marked_words(&self) -> Vec<String> {
        let mut words: Vec<_> = self.marked.iter().cloned().collect();
        words.sort();
        words
    }

    /// A card wins once every word is marked (and it has at least one word).
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.hits == self.words.len() && !self.words.is_empty()
    }

    /// Iterative binary search over the sorted word list.
    fn contains(&self, target: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }

        let mut lo = 0usize;
        let mut hi = self.words.len() - 1;

        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            match self.words[mid].as_str().cmp(target) {
                Ordering::Equal => return true,
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => {
                    if mid == 0 {
                        return false;
                    }
                    hi = mid - 1;
                }
            }
        }

        false
    }

    /// Mark a called word against this card.
    ///
    /// Case-insensitive and idempotent: re-marking an already-marked word
    /// never increments `hits`.
    pub fn mark(&mut self, word: &str) -> MarkOutcome {
        let word = word.to_uppercase();

        if self.marked.contains(&word) {
            return MarkOutcome::AlreadyMarked;
        }

        if self.contains(&word) {
            self.marked.insert(word);
            self.hits += 1;
            MarkOutcome::Marked
        } else {
            MarkOutcome::NotOnCard
        }
    }

    /// Serializable snapshot of this card.
    #[must_use]
    pub fn view(&self) -> CardView {
        CardView {
            id: self.id.as_str().to_string(),
            language: self.language,
            words: self.words.clone(),
            marked_words: self.marked_words(),
            hit_count: self.hits,
            total_words: self.words.len(),
            is_winner: self.is_winner(),
        }
    }
}

/// Serialized card shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: String,
    pub language: LanguageCode,
    pub words: Vec<String>,
    pub marked_words: Vec<String>,
    pub hit_count: usize,
    pub total_words: usize,
    pub is_winner: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp() -> LanguageCode {
        LanguageCode::new("SP").unwrap()
    }

    fn beach_card() -> Card {
        let id = CardId::new("SP000001").unwrap();
        let words = vec!["SOL", "PLAYA", "ARENA", "MAR"]
            .into_iter()
            .map(String::from)
            .collect();
        Card::new(id, sp(), words)
    }

    #[test]
    fn test_card_id_validation() {
        assert_eq!(CardId::new("sp000001").unwrap().as_str(), "SP000001");
        assert!(CardId::new("").is_err());
        assert!(CardId::new("SP 01").is_err());
        assert!(CardId::new("SP|01").is_err());
        assert!(CardId::new("SP,01").is_err());
    }

    #[test]
    fn test_words_stored_sorted_uppercase() {
        let card = beach_card();
        assert_eq!(card.words(), &["ARENA", "MAR", "PLAYA", "SOL"]);
        assert_eq!(card.total_words(), 4);
        assert_eq!(card.hits(), 0);
        assert!(!card.is_winner());
    }

    #[test]
    fn test_mark_case_insensitive() {
        let mut card = beach_card();
        assert_eq!(card.mark("mar"), MarkOutcome::Marked);
        assert_eq!(card.hits(), 1);
        assert!(card.is_marked("MAR"));
    }

    #[test]
    fn test_mark_idempotent() {
        let mut card = beach_card();
        assert_eq!(card.mark("MAR"), MarkOutcome::Marked);
        assert_eq!(card.mark("MAR"), MarkOutcome::AlreadyMarked);
        assert_eq!(card.mark("mar"), MarkOutcome::AlreadyMarked);
        assert_eq!(card.hits(), 1);
    }

    #[test]
    fn test_mark_miss() {
        let mut card = beach_card();
        assert_eq!(card.mark("LUNA"), MarkOutcome::NotOnCard);
        assert_eq!(card.hits(), 0);
    }

    #[test]
    fn test_winner_on_fourth_distinct_mark() {
        let mut card = beach_card();
        for (i, word) in ["PLAYA", "SOL", "ARENA"].iter().enumerate() {
            assert_eq!(card.mark(word), MarkOutcome::Marked);
            assert_eq!(card.hits(), i + 1);
            assert!(!card.is_winner());
        }

        assert_eq!(card.mark("MAR"), MarkOutcome::Marked);
        assert!(card.is_winner());

        // Fifth call is a no-op
        assert_eq!(card.mark("MAR"), MarkOutcome::AlreadyMarked);
        assert_eq!(card.hits(), 4);
        assert!(card.is_winner());
    }

    #[test]
    fn test_binary_search_boundaries() {
        let card = beach_card();
        // Below first, between, above last
        assert!(!card.contains("AAA"));
        assert!(!card.contains("CARACOL"));
        assert!(!card.contains("ZZZ"));
        // Exact first and last
        assert!(card.contains("ARENA"));
        assert!(card.contains("SOL"));
    }

    #[test]
    fn test_single_word_card() {
        let id = CardId::new("SP000002").unwrap();
        let mut card = Card::new(id, sp(), vec!["BINGO".to_string()]);

        assert!(!card.is_winner());
        assert_eq!(card.mark("bingo"), MarkOutcome::Marked);
        assert!(card.is_winner());
    }

    #[test]
    fn test_view_shape() {
        let mut card = beach_card();
        card.mark("SOL");
        card.mark("MAR");

        let view = card.view();
        assert_eq!(view.id, "SP000001");
        assert_eq!(view.marked_words, vec!["MAR", "SOL"]);
        assert_eq!(view.hit_count, 2);
        assert_eq!(view.total_words, 4);
        assert!(!view.is_winner);

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("markedWords").is_some());
        assert!(json.get("hitCount").is_some());
        assert!(json.get("totalWords").is_some());
        assert!(json.get("isWinner").is_some());
    }
}
