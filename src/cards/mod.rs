//! Cards: the validated entities the session plays with.
//!
//! - `card`: the `Card` entity with binary-search marking
//! - `validator`: raw line parsing and rule validation
//! - `generator`: random cards sampled from a word bank

pub mod card;
pub mod generator;
pub mod validator;

pub use card::{Card, CardId, CardView, MarkOutcome};
pub use generator::generate_card;
pub use validator::{parse_deck, parse_line, parse_manual};
