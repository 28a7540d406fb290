//! Session configuration: languages, card sizes, and optional word banks.
//!
//! Callers configure a session by providing a [`RuleSet`] at load time:
//! - [`LanguageCode`]: validated 2-letter language identifier
//! - [`LanguageRule`]: required card size, display name, optional word bank
//!
//! The engine never hardcodes languages - [`RuleSet::standard`] only provides
//! a default that callers can replace per session. A `RuleSet` is immutable
//! once handed to the engine.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Language identifier: exactly two ASCII letters, stored uppercase.
///
/// Doubles as the card ID prefix ("SP000001" is a Spanish card).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageCode([u8; 2]);

impl LanguageCode {
    /// Parse a code from a string. Returns `None` unless the input is
    /// exactly two ASCII letters (case-insensitive).
    #[must_use]
    pub fn new(code: &str) -> Option<Self> {
        let bytes = code.as_bytes();
        if bytes.len() == 2 && bytes.iter().all(u8::is_ascii_alphabetic) {
            Some(Self([
                bytes[0].to_ascii_uppercase(),
                bytes[1].to_ascii_uppercase(),
            ]))
        } else {
            None
        }
    }

    /// The code as a 2-character string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Construction guarantees ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CodeVisitor;

        impl Visitor<'_> for CodeVisitor {
            type Value = LanguageCode;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a 2-letter language code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LanguageCode, E> {
                LanguageCode::new(v)
                    .ok_or_else(|| E::custom(format!("invalid language code '{v}'")))
            }
        }

        deserializer.deserialize_str(CodeVisitor)
    }
}

/// Per-language rule: required card size, display name, optional word bank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRule {
    /// Exact number of words a card of this language must carry.
    pub word_count: usize,

    /// Human-readable name (for display/messages).
    pub display_name: String,

    /// Legal words for this language. `None` means no bank is configured
    /// and called words are checked against the cards in play instead.
    pub word_bank: Option<FxHashSet<String>>,
}

/// Immutable per-session language configuration.
///
/// Built once via the builder methods, then handed to the engine at load
/// time. Lookups and iteration are keyed by [`LanguageCode`].
///
/// ## Example
///
/// ```
/// use word_bingo::core::{LanguageCode, RuleSet};
///
/// let rules = RuleSet::new()
///     .with_language("SP", 4, "Español")
///     .with_word_bank("SP", ["SOL", "MAR", "PLAYA", "ARENA"]);
///
/// let sp = LanguageCode::new("SP").unwrap();
/// assert_eq!(rules.get(sp).unwrap().word_count, 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: FxHashMap<LanguageCode, LanguageRule>,
}

impl RuleSet {
    /// Create an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in four-language default (no word banks).
    ///
    /// Callers override this per session; bank content is always supplied
    /// externally.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_language("SP", 24, "Español")
            .with_language("EN", 14, "English")
            .with_language("PT", 20, "Português")
            .with_language("DT", 10, "Dutch")
    }

    /// Add a language rule. Panics on an invalid code or zero word count;
    /// both are caller configuration bugs, not runtime conditions.
    #[must_use]
    pub fn with_language(mut self, code: &str, word_count: usize, display_name: &str) -> Self {
        assert!(word_count > 0, "word count must be positive");
        let code = LanguageCode::new(code)
            .unwrap_or_else(|| panic!("invalid language code '{code}'"));

        self.rules.insert(
            code,
            LanguageRule {
                word_count,
                display_name: display_name.to_string(),
                word_bank: None,
            },
        );
        self
    }

    /// Attach a word bank to an already-configured language.
    ///
    /// Words are uppercased on the way in. Panics if the language is not
    /// configured.
    #[must_use]
    pub fn with_word_bank<I, S>(mut self, code: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let code = LanguageCode::new(code)
            .unwrap_or_else(|| panic!("invalid language code '{code}'"));
        let rule = self
            .rules
            .get_mut(&code)
            .unwrap_or_else(|| panic!("no rule configured for language '{code}'"));

        rule.word_bank = Some(
            words
                .into_iter()
                .map(|w| w.as_ref().to_uppercase())
                .collect(),
        );
        self
    }

    /// Look up the rule for a language.
    #[must_use]
    pub fn get(&self, code: LanguageCode) -> Option<&LanguageRule> {
        self.rules.get(&code)
    }

    /// Is this language configured?
    #[must_use]
    pub fn contains(&self, code: LanguageCode) -> bool {
        self.rules.contains_key(&code)
    }

    /// All configured codes, sorted (deterministic iteration order).
    #[must_use]
    pub fn codes(&self) -> Vec<LanguageCode> {
        let mut codes: Vec<_> = self.rules.keys().copied().collect();
        codes.sort();
        codes
    }

    /// Comma-joined sorted code list, for error messages.
    #[must_use]
    pub fn allowed_codes(&self) -> String {
        self.codes()
            .iter()
            .map(LanguageCode::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of configured languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is the rule set empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
