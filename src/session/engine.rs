//! The session state machine.
//!
//! `Idle → Active → Finished`, with `reset` returning to `Idle` from any
//! phase. The engine owns the roster, the language rotation, and the
//! called-word log; it runs no internal threads and is not internally
//! synchronized - the hosting layer serializes mutating calls.
//!
//! Whether the rotation advances by itself after every non-winning call or
//! only on explicit `advance_language` calls is an explicit configuration
//! choice ([`AdvanceMode`], default `Auto`).

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::cards::card::Card;
use crate::cards::{generator, validator};
use crate::core::error::{CardError, SessionError};
use crate::core::rng::SessionRng;
use crate::core::ruleset::{LanguageCode, RuleSet};
use crate::roster::distributor::{distribute, DistributionPolicy};
use crate::roster::player::{Player, PlayerView};

use super::snapshot::{
    ActiveLanguage, AdvanceOutcome, CallOutcome, CalledWord, LoadSummary, SessionSnapshot,
    StartOutcome, Winner,
};

/// Session lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No round running; roster may be loaded or edited.
    #[default]
    Idle,
    /// A round is running; words may be called.
    Active,
    /// A winner ended the round; only `reset` + `start` resumes play.
    Finished,
}

/// Rotation advance behavior after a non-winning call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdvanceMode {
    /// Advance to the next language after every non-winning call,
    /// wrapping cyclically.
    #[default]
    Auto,
    /// Hold the current language until `advance_language` is called.
    Manual,
}

/// The word-bingo session engine.
///
/// Owns the roster and rotation state; all mutation goes through the
/// operations below, and every random decision draws from the seeded
/// session RNG.
///
/// ## Example
///
/// ```
/// use word_bingo::core::RuleSet;
/// use word_bingo::roster::DistributionPolicy;
/// use word_bingo::session::SessionEngine;
///
/// let rules = RuleSet::new().with_language("SP", 2, "Español");
/// let mut engine = SessionEngine::new(42);
///
/// engine
///     .load("SP000001 SOL MAR", 1, rules, DistributionPolicy::AtLeastOne)
///     .unwrap();
/// engine.start().unwrap();
///
/// let outcome = engine.call_word("sol").unwrap();
/// assert!(!outcome.finished);
///
/// let outcome = engine.call_word("mar").unwrap();
/// assert!(outcome.finished);
/// assert_eq!(outcome.winners[0].card_id, "SP000001");
/// ```
#[derive(Clone, Debug)]
pub struct SessionEngine {
    rules: RuleSet,
    players: Vec<Player>,
    rotation: Vec<LanguageCode>,
    current: usize,
    phase: Phase,
    called: Vec<CalledWord>,
    rng: SessionRng,
    advance_mode: AdvanceMode,
}

impl SessionEngine {
    /// Create an engine with the given RNG seed and the standard rule set.
    ///
    /// The rule set is replaced by whatever the next `load` supplies.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SessionRng::new(seed))
    }

    /// Create an engine around an externally-built RNG.
    #[must_use]
    pub fn with_rng(rng: SessionRng) -> Self {
        Self {
            rules: RuleSet::standard(),
            players: Vec::new(),
            rotation: Vec::new(),
            current: 0,
            phase: Phase::Idle,
            called: Vec::new(),
            rng,
            advance_mode: AdvanceMode::default(),
        }
    }

    /// Select the rotation advance behavior.
    #[must_use]
    pub fn with_advance_mode(mut self, mode: AdvanceMode) -> Self {
        self.advance_mode = mode;
        self
    }

    /// The rule set currently in force.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Is a round running?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// The current roster.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Parse, validate, and distribute a raw card file in one step.
    ///
    /// Atomic: on any validation or distribution error the previous roster
    /// and rules stay in force. On success the session returns to `Idle`
    /// with the new roster.
    pub fn load(
        &mut self,
        raw_text: &str,
        n_players: usize,
        rules: RuleSet,
        policy: DistributionPolicy,
    ) -> Result<LoadSummary, SessionError> {
        let cards = validator::parse_deck(raw_text, &rules)?;
        let cards_loaded = cards.len();
        let players = distribute(cards, n_players, policy, &rules, &mut self.rng)?;

        self.rules = rules;
        self.players = players;
        self.rotation.clear();
        self.current = 0;
        self.called.clear();
        self.phase = Phase::Idle;

        info!(cards = cards_loaded, players = n_players, %policy, "deck loaded");

        Ok(LoadSummary {
            cards_loaded,
            players: n_players,
        })
    }

    /// Validate a manually-entered card against the current rules.
    pub fn manual_card(&self, id: &str, words: &[&str]) -> Result<Card, CardError> {
        validator::parse_manual(id, words, &self.rules)
    }

    /// Register an extra player with pre-validated cards.
    ///
    /// Only allowed while no round is running.
    pub fn add_player(&mut self, name: &str, cards: Vec<Card>) -> Result<(), SessionError> {
        if self.phase == Phase::Active {
            return Err(SessionError::AlreadyActive);
        }
        if cards.is_empty() {
            return Err(SessionError::InsufficientCards {
                cards: 0,
                players: 1,
            });
        }

        debug!(player = name, cards = cards.len(), "player added");
        self.players.push(Player::new(name, cards));
        Ok(())
    }

    /// Generate a random card from the current rules' word bank.
    #[must_use]
    pub fn generate_card(&mut self, language: LanguageCode) -> Option<Card> {
        generator::generate_card(&self.rules, language, &mut self.rng)
    }

    /// Start a round: draw the language rotation and go `Active`.
    ///
    /// Valid from `Idle` or `Finished`. The rotation is a random permutation
    /// of the distinct languages actually present among distributed cards.
    pub fn start(&mut self) -> Result<StartOutcome, SessionError> {
        if self.phase == Phase::Active {
            return Err(SessionError::AlreadyActive);
        }
        if !self.players.iter().any(Player::has_cards) {
            return Err(SessionError::NoPlayers);
        }

        let languages: BTreeSet<LanguageCode> = self
            .players
            .iter()
            .flat_map(|p| p.cards().iter().map(Card::language))
            .collect();

        let mut rotation: Vec<LanguageCode> = languages.into_iter().collect();
        self.rng.shuffle(&mut rotation);

        self.rotation = rotation;
        self.current = 0;
        self.called.clear();
        self.phase = Phase::Active;

        info!(rotation = ?self.rotation, "session started");

        Ok(StartOutcome {
            rotation: self.rotation.clone(),
            current: self.require_current()?,
        })
    }

    /// Call a word against the active language.
    ///
    /// The word must be legal for the active language: a member of its word
    /// bank, or, for bank-less languages, present on at least one card of
    /// that language. Legal calls are logged unconditionally; every player's
    /// matching-language cards are marked in a single global pass and all
    /// simultaneously completed cards win together.
    pub fn call_word(&mut self, word: &str) -> Result<CallOutcome, SessionError> {
        if self.phase != Phase::Active {
            return Err(SessionError::NotActive);
        }

        let language = self.current_code()?;
        let word = word.to_uppercase();

        if !self.is_legal_word(&word, language) {
            return Err(SessionError::InvalidWord { word, language });
        }

        self.called.push(CalledWord {
            language,
            word: word.clone(),
        });

        let mut winners = Vec::new();
        for player in &mut self.players {
            for card_id in player.mark_in_language(&word, language) {
                winners.push(Winner {
                    player: player.name().to_string(),
                    card_id: card_id.as_str().to_string(),
                });
            }
        }

        debug!(%word, %language, winners = winners.len(), "word called");

        if !winners.is_empty() {
            self.phase = Phase::Finished;
            info!(winners = winners.len(), "session finished");
            return Ok(CallOutcome {
                word,
                language,
                winners,
                finished: true,
                next: None,
            });
        }

        let next = match self.advance_mode {
            AdvanceMode::Auto => {
                self.advance_index();
                Some(self.require_current()?)
            }
            AdvanceMode::Manual => None,
        };

        Ok(CallOutcome {
            word,
            language,
            winners,
            finished: false,
            next,
        })
    }

    /// Manually advance the rotation, wrapping past the end.
    ///
    /// Pure index mutation: card state is untouched. Only valid while
    /// `Active`.
    pub fn advance_language(&mut self) -> Result<AdvanceOutcome, SessionError> {
        if self.phase != Phase::Active {
            return Err(SessionError::NotActive);
        }

        let new_round = self.advance_index();
        Ok(AdvanceOutcome {
            current: self.require_current()?,
            new_round,
        })
    }

    /// Read-only snapshot of the whole session; callable in any phase.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            active: self.phase == Phase::Active,
            finished: self.phase == Phase::Finished,
            rotation_order: self.rotation.clone(),
            current_language: self.language_info(self.current),
            called_words: self.called.clone(),
            players: self.players.iter().map(Player::view).collect(),
            total_players: self.players.len(),
        }
    }

    /// Look up a single player's view by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<PlayerView> {
        self.players
            .iter()
            .find(|p| p.name() == name)
            .map(Player::view)
    }

    /// Discard roster, rotation, and log; back to `Idle`.
    pub fn reset(&mut self) {
        self.players.clear();
        self.rotation.clear();
        self.current = 0;
        self.called.clear();
        self.phase = Phase::Idle;

        info!("session reset");
    }

    fn is_legal_word(&self, word: &str, language: LanguageCode) -> bool {
        match self.rules.get(language).and_then(|r| r.word_bank.as_ref()) {
            Some(bank) => bank.contains(word),
            // No bank configured: legal iff some card of this language
            // carries the word.
            None => self.players.iter().any(|p| {
                p.cards()
                    .iter()
                    .any(|c| c.language() == language && c.words().binary_search_by(|w| w.as_str().cmp(word)).is_ok())
            }),
        }
    }

    fn advance_index(&mut self) -> bool {
        if self.rotation.is_empty() {
            return false;
        }
        self.current = (self.current + 1) % self.rotation.len();
        self.current == 0
    }

    fn current_code(&self) -> Result<LanguageCode, SessionError> {
        self.rotation
            .get(self.current)
            .copied()
            .ok_or_else(|| SessionError::Internal("rotation index out of range".to_string()))
    }

    fn require_current(&self) -> Result<ActiveLanguage, SessionError> {
        self.language_info(self.current)
            .ok_or_else(|| SessionError::Internal("empty rotation".to_string()))
    }

    fn language_info(&self, index: usize) -> Option<ActiveLanguage> {
        let code = *self.rotation.get(index)?;
        let name = self
            .rules
            .get(code)
            .map_or_else(|| code.as_str().to_string(), |r| r.display_name.clone());

        Some(ActiveLanguage { code, name, index })
    }
}
