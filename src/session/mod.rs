//! The session engine: rotation state machine, word calls, snapshots.

pub mod engine;
pub mod snapshot;

pub use engine::{AdvanceMode, Phase, SessionEngine};
pub use snapshot::{
    ActiveLanguage, AdvanceOutcome, CallOutcome, CalledWord, LoadSummary, SessionSnapshot,
    StartOutcome, Winner,
};
