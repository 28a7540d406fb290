//! Serializable session views and operation outcomes.
//!
//! These are the wire shapes the hosting layer sends to clients. They are
//! plain data: constructing one never mutates the engine.

use serde::{Deserialize, Serialize};

use crate::core::ruleset::LanguageCode;
use crate::roster::player::PlayerView;

/// The rotation slot the session is currently on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveLanguage {
    pub code: LanguageCode,
    pub name: String,
    pub index: usize,
}

/// One entry of the called-word audit log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalledWord {
    pub language: LanguageCode,
    pub word: String,
}

/// A (player, card) pair completed by a call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    pub player: String,
    pub card_id: String,
}

/// Result of a successful load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSummary {
    pub cards_loaded: usize,
    pub players: usize,
}

/// Result of `start`: the drawn rotation and its first slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartOutcome {
    pub rotation: Vec<LanguageCode>,
    pub current: ActiveLanguage,
}

/// Result of a successful `call_word`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallOutcome {
    pub word: String,
    pub language: LanguageCode,
    /// All cards completed by this call; ties are never broken.
    pub winners: Vec<Winner>,
    pub finished: bool,
    /// Where auto-advance moved the rotation (absent when finished or in
    /// manual-advance mode).
    pub next: Option<ActiveLanguage>,
}

/// Result of a manual `advance_language`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceOutcome {
    pub current: ActiveLanguage,
    /// True when the index wrapped back to the start of the rotation.
    pub new_round: bool,
}

/// Read-only snapshot of the whole session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub active: bool,
    pub finished: bool,
    pub rotation_order: Vec<LanguageCode>,
    pub current_language: Option<ActiveLanguage>,
    pub called_words: Vec<CalledWord>,
    pub players: Vec<PlayerView>,
    pub total_players: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_field_names() {
        let snapshot = SessionSnapshot {
            active: true,
            finished: false,
            rotation_order: vec![LanguageCode::new("SP").unwrap()],
            current_language: Some(ActiveLanguage {
                code: LanguageCode::new("SP").unwrap(),
                name: "Español".to_string(),
                index: 0,
            }),
            called_words: vec![CalledWord {
                language: LanguageCode::new("SP").unwrap(),
                word: "SOL".to_string(),
            }],
            players: vec![],
            total_players: 0,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("rotationOrder").is_some());
        assert!(json.get("currentLanguage").is_some());
        assert!(json.get("calledWords").is_some());
        assert!(json.get("totalPlayers").is_some());
    }

    #[test]
    fn test_winner_field_names() {
        let winner = Winner {
            player: "Player 1".to_string(),
            card_id: "SP000001".to_string(),
        };

        let json = serde_json::to_value(&winner).unwrap();
        assert_eq!(json.get("cardId").unwrap(), "SP000001");
    }
}
