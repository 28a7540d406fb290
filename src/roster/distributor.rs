//! Card distribution: allocating the validated pool among players.
//!
//! Two policies:
//!
//! - [`DistributionPolicy::AtLeastOne`]: one uniform shuffle of the whole
//!   pool, then round-robin; requires at least one card per player.
//! - [`DistributionPolicy::OnePerLanguage`]: per-language buckets, each
//!   shuffled independently; every player receives exactly one card of every
//!   configured language, then the pooled surplus goes round-robin.
//!
//! Distribution is atomic: any error leaves the caller's existing roster
//! untouched (the engine only swaps in the returned roster on success).
//! All shuffles run on the session RNG, so a fixed seed reproduces the
//! exact player-to-card assignment.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::card::Card;
use crate::core::error::SessionError;
use crate::core::rng::SessionRng;
use crate::core::ruleset::{LanguageCode, RuleSet};

use super::player::Player;

/// How the validated card pool is split among players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionPolicy {
    /// Shuffle everything, deal round-robin, guarantee one card each.
    AtLeastOne,
    /// Guarantee one card per configured language per player.
    OnePerLanguage,
}

impl FromStr for DistributionPolicy {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "at_least_one" => Ok(Self::AtLeastOne),
            "one_per_language" => Ok(Self::OnePerLanguage),
            other => Err(SessionError::InvalidPolicy(other.to_string())),
        }
    }
}

impl std::fmt::Display for DistributionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtLeastOne => f.write_str("at_least_one"),
            Self::OnePerLanguage => f.write_str("one_per_language"),
        }
    }
}

/// Distribute a card pool among `n_players` under the given policy.
pub fn distribute(
    cards: Vec<Card>,
    n_players: usize,
    policy: DistributionPolicy,
    rules: &RuleSet,
    rng: &mut SessionRng,
) -> Result<Vec<Player>, SessionError> {
    if n_players == 0 {
        return Err(SessionError::NoPlayers);
    }

    debug!(cards = cards.len(), players = n_players, %policy, "distributing cards");

    let hands = match policy {
        DistributionPolicy::AtLeastOne => deal_at_least_one(cards, n_players, rng)?,
        DistributionPolicy::OnePerLanguage => deal_one_per_language(cards, n_players, rules, rng)?,
    };

    Ok(hands
        .into_iter()
        .enumerate()
        .map(|(i, cards)| Player::new(format!("Player {}", i + 1), cards))
        .collect())
}

fn deal_at_least_one(
    mut cards: Vec<Card>,
    n_players: usize,
    rng: &mut SessionRng,
) -> Result<Vec<Vec<Card>>, SessionError> {
    if cards.len() < n_players {
        return Err(SessionError::InsufficientCards {
            cards: cards.len(),
            players: n_players,
        });
    }

    rng.shuffle(&mut cards);

    // The first n_players cards land one-per-player, which is the guarantee;
    // the remainder continues round-robin from player 0.
    let mut hands: Vec<Vec<Card>> = (0..n_players).map(|_| Vec::new()).collect();
    for (i, card) in cards.into_iter().enumerate() {
        hands[i % n_players].push(card);
    }

    Ok(hands)
}

fn deal_one_per_language(
    cards: Vec<Card>,
    n_players: usize,
    rules: &RuleSet,
    rng: &mut SessionRng,
) -> Result<Vec<Vec<Card>>, SessionError> {
    // Seed a bucket per configured language; sorted key order keeps the
    // shuffle sequence (and thus the deal) reproducible for a fixed seed.
    let mut buckets: BTreeMap<LanguageCode, Vec<Card>> =
        rules.codes().into_iter().map(|c| (c, Vec::new())).collect();
    let mut leftovers = Vec::new();

    for card in cards {
        match buckets.get_mut(&card.language()) {
            Some(bucket) => bucket.push(card),
            // Pool cards of unconfigured languages with the surplus.
            None => leftovers.push(card),
        }
    }

    for (language, bucket) in &buckets {
        if bucket.len() < n_players {
            return Err(SessionError::InsufficientLanguageCards {
                language: *language,
                cards: bucket.len(),
                players: n_players,
            });
        }
    }

    let mut hands: Vec<Vec<Card>> = (0..n_players).map(|_| Vec::new()).collect();

    for (_, mut bucket) in buckets {
        rng.shuffle(&mut bucket);
        let surplus = bucket.split_off(n_players);
        for (hand, card) in hands.iter_mut().zip(bucket) {
            hand.push(card);
        }
        leftovers.extend(surplus);
    }

    rng.shuffle(&mut leftovers);
    for (i, card) in leftovers.into_iter().enumerate() {
        hands[i % n_players].push(card);
    }

    Ok(hands)
}
