//! Core session types: RNG, language configuration, errors.
//!
//! These are the building blocks the rest of the engine is assembled from.
//! Callers configure languages via `RuleSet` rather than modifying the core.

pub mod error;
pub mod rng;
pub mod ruleset;

pub use error::{CardError, SessionError};
pub use rng::{SessionRng, SessionRngState};
pub use ruleset::{LanguageCode, LanguageRule, RuleSet};
