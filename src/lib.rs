//! # word-bingo
//!
//! A multiplayer word-bingo session engine.
//!
//! The engine validates raw card definitions against a per-session
//! [`RuleSet`], distributes the card pool among players under a selected
//! policy, then rotates through the languages in play: each called word is
//! marked on every matching-language card via binary search until one or
//! more cards complete and the session finishes.
//!
//! ## Design Principles
//!
//! 1. **Explicit session instances**: no global state; the hosting layer
//!    owns a [`SessionEngine`] and passes it around.
//!
//! 2. **Configuration over convention**: languages, card sizes, and word
//!    banks come from a caller-supplied `RuleSet`, never hardcoded.
//!
//! 3. **Deterministic randomness**: every shuffle draws from a seeded
//!    [`SessionRng`], so distributions and rotations are reproducible.
//!
//! 4. **Single logical writer**: all operations are synchronous and the
//!    engine is not internally synchronized; callers serialize mutations.
//!
//! ## Modules
//!
//! - `core`: RNG, language configuration, error taxonomy
//! - `cards`: the `Card` entity, line validation, random generation
//! - `roster`: players and distribution policies
//! - `session`: the `SessionEngine` state machine and snapshots

pub mod cards;
pub mod core;
pub mod roster;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CardError, LanguageCode, LanguageRule, RuleSet, SessionError, SessionRng, SessionRngState,
};

pub use crate::cards::{Card, CardId, CardView, MarkOutcome};

pub use crate::roster::{DistributionPolicy, Player, PlayerView};

pub use crate::session::{
    ActiveLanguage, AdvanceMode, AdvanceOutcome, CallOutcome, CalledWord, LoadSummary, Phase,
    SessionEngine, SessionSnapshot, StartOutcome, Winner,
};
