//! The player entity: a named owner of distributed cards.
//!
//! The card list is fixed at distribution time; only the referenced cards'
//! marked/hit state changes afterwards, via [`Player::mark_in_language`].

use serde::{Deserialize, Serialize};

use crate::cards::card::{Card, CardId, CardView, MarkOutcome};
use crate::core::ruleset::LanguageCode;

/// A player and the cards dealt to them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    cards: Vec<Card>,
}

impl Player {
    /// Create a player with their dealt cards.
    #[must_use]
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards held.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Does this player hold at least one card?
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Mark a called word on every card of the active language.
    ///
    /// Cards of other languages are skipped. Returns the IDs of cards whose
    /// win was completed by exactly this mark.
    pub fn mark_in_language(&mut self, word: &str, language: LanguageCode) -> Vec<CardId> {
        let mut winners = Vec::new();

        for card in &mut self.cards {
            if card.language() != language {
                continue;
            }

            if card.mark(word) == MarkOutcome::Marked && card.is_winner() {
                winners.push(card.id().clone());
            }
        }

        winners
    }

    /// Serializable snapshot of this player.
    #[must_use]
    pub fn view(&self) -> PlayerView {
        PlayerView {
            name: self.name.clone(),
            cards: self.cards.iter().map(Card::view).collect(),
            total_cards: self.cards.len(),
        }
    }
}

/// Serialized player shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub name: String,
    pub cards: Vec<CardView>,
    pub total_cards: usize,
}
