//! Random card generation from a configured word bank.

use crate::core::rng::SessionRng;
use crate::core::ruleset::{LanguageCode, RuleSet};

use super::card::{Card, CardId};

/// Generate a random card for a language.
///
/// Samples `word_count` distinct words from the language's bank and mints a
/// canonical ID from the language prefix plus 6 random digits. Returns `None`
/// if the language is unknown, has no bank, or the bank is smaller than the
/// required card size.
#[must_use]
pub fn generate_card(
    rules: &RuleSet,
    language: LanguageCode,
    rng: &mut SessionRng,
) -> Option<Card> {
    let rule = rules.get(language)?;
    let bank = rule.word_bank.as_ref()?;
    if bank.len() < rule.word_count {
        return None;
    }

    // Sorted base order so a fixed seed yields the same sample.
    let mut pool: Vec<&String> = bank.iter().collect();
    pool.sort();

    let words: Vec<String> = rng
        .sample(&pool, rule.word_count)
        .into_iter()
        .map(|w| (*w).clone())
        .collect();

    let id = CardId::new(&format!("{}{}", language, rng.digits(6))).ok()?;
    Some(Card::new(id, language, words))
}
