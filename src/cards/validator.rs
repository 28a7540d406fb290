//! Card line validation.
//!
//! Two line formats are accepted:
//!
//! - **Format A** (whitespace-delimited): `SP000001 SOL PLAYA ARENA MAR`.
//!   The language comes from the 2-letter ID prefix; IDs are 2 letters
//!   followed by 6 digits.
//! - **Format B** (explicit-delimited): `C-17|SP|SOL,PLAYA,ARENA,MAR`.
//!   The language field is explicit and the ID is free-form.
//!
//! Blank lines and `#` comment lines are skipped. Loading is fail-fast: the
//! first invalid line aborts the whole load with its 1-based line number.

use crate::core::error::{CardError, SessionError};
use crate::core::ruleset::{LanguageCode, LanguageRule, RuleSet};

use super::card::{Card, CardId};

/// Parse a single line into a card.
///
/// Returns `Ok(None)` for lines that carry no card (blank, comment, or a
/// lone token with no words).
pub fn parse_line(line: &str, rules: &RuleSet) -> Result<Option<Card>, CardError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    if line.contains('|') {
        parse_delimited(line, rules).map(Some)
    } else {
        parse_whitespace(line, rules)
    }
}

/// Parse a whole text blob into a validated card pool, fail-fast.
pub fn parse_deck(text: &str, rules: &RuleSet) -> Result<Vec<Card>, SessionError> {
    let mut cards = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        match parse_line(line, rules) {
            Ok(Some(card)) => cards.push(card),
            Ok(None) => {}
            Err(reason) => {
                return Err(SessionError::InvalidCard {
                    line: idx + 1,
                    reason,
                })
            }
        }
    }

    if cards.is_empty() {
        return Err(SessionError::EmptyDeck);
    }

    Ok(cards)
}

/// Format A: `<ID> w1 w2 ... wN`, language from the ID prefix.
fn parse_whitespace(line: &str, rules: &RuleSet) -> Result<Option<Card>, CardError> {
    let mut parts = line.split_whitespace();
    let Some(raw_id) = parts.next() else {
        return Ok(None);
    };
    let words: Vec<&str> = parts.collect();
    if words.is_empty() {
        // Lone token, treated like a blank line
        return Ok(None);
    }

    let raw_id = raw_id.to_uppercase();
    let prefix = validate_id_shape(&raw_id)?;

    let language = LanguageCode::new(prefix).ok_or_else(|| {
        CardError::Format(format!(
            "card {raw_id}: first 2 characters must be letters"
        ))
    })?;

    let rule = lookup_rule(language, rules)?;
    let id = CardId::new(&raw_id)?;

    build_card(id, language, rule, &words).map(Some)
}

/// Format B: `<ID>|<LANG>|w1,w2,...,wN`.
fn parse_delimited(line: &str, rules: &RuleSet) -> Result<Card, CardError> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 3 {
        return Err(CardError::Format(format!(
            "expected '<ID>|<LANG>|w1,w2,...', found {} fields",
            fields.len()
        )));
    }

    let id = CardId::new(fields[0].trim())?;

    let raw_code = fields[1].trim();
    let language = LanguageCode::new(raw_code).ok_or_else(|| CardError::UnknownLanguage {
        code: raw_code.to_string(),
        allowed: rules.allowed_codes(),
    })?;
    let rule = lookup_rule(language, rules)?;

    let mut words = Vec::new();
    for token in fields[2].split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(CardError::Format(format!(
                "card {id}: empty word in word list"
            )));
        }
        words.push(token);
    }

    build_card(id, language, rule, &words)
}

/// Validate a manually-entered card (no input line involved).
///
/// The language comes from the ID's 2-character prefix; the full canonical
/// digit suffix is not required for manual cards.
pub fn parse_manual(id: &str, words: &[&str], rules: &RuleSet) -> Result<Card, CardError> {
    let id = CardId::new(id)?;

    let prefix = id.as_str().get(..2).unwrap_or_default();
    let language = LanguageCode::new(prefix).ok_or_else(|| CardError::UnknownLanguage {
        code: prefix.to_string(),
        allowed: rules.allowed_codes(),
    })?;
    let rule = lookup_rule(language, rules)?;

    build_card(id, language, rule, words)
}

/// Canonical ID shape: 2 ASCII letters followed by 6 ASCII digits.
fn validate_id_shape(id: &str) -> Result<&str, CardError> {
    if id.len() != 8 || !id.is_ascii() {
        return Err(CardError::Format(format!(
            "card {id}: ID must be exactly 8 characters"
        )));
    }

    let (prefix, suffix) = id.split_at(2);
    if !prefix.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(CardError::Format(format!(
            "card {id}: first 2 characters must be letters"
        )));
    }
    if !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CardError::Format(format!(
            "card {id}: last 6 characters must be digits"
        )));
    }

    Ok(prefix)
}

fn lookup_rule(language: LanguageCode, rules: &RuleSet) -> Result<&LanguageRule, CardError> {
    rules.get(language).ok_or_else(|| CardError::UnknownLanguage {
        code: language.as_str().to_string(),
        allowed: rules.allowed_codes(),
    })
}

/// Shared tail of both formats: count, uniqueness, and bank checks.
fn build_card(
    id: CardId,
    language: LanguageCode,
    rule: &LanguageRule,
    words: &[&str],
) -> Result<Card, CardError> {
    if words.len() != rule.word_count {
        return Err(CardError::WordCountMismatch {
            language: rule.display_name.clone(),
            expected: rule.word_count,
            received: words.len(),
        });
    }

    let mut normalized = Vec::with_capacity(words.len());
    for word in words {
        let word = word.to_uppercase();
        if normalized.contains(&word) {
            return Err(CardError::Format(format!(
                "card {id}: duplicate word '{word}'"
            )));
        }
        if let Some(bank) = &rule.word_bank {
            if !bank.contains(&word) {
                return Err(CardError::UnknownWord { word, language });
            }
        }
        normalized.push(word);
    }

    Ok(Card::new(id, language, normalized))
}
