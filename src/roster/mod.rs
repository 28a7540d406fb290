//! Roster: players and the distribution policies that build them.

pub mod distributor;
pub mod player;

pub use distributor::{distribute, DistributionPolicy};
pub use player::{Player, PlayerView};
