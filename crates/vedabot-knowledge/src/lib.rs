//! # VedaBot Knowledge Base
//!
//! A fixed, ordered table of Vedic philosophy terms plus a handful of
//! phrase rules, and the matcher that maps a free-text query to one of them.
//!
//! ## How it works
//! ```text
//! User: "What is Karma?"
//!   ↓ lowercase + trim
//! "what is karma?"
//!   ↓ term scan (table order, first substring hit wins)
//! 📖 **KARMA** + body
//!   ↓ no term? → phrase rules (how many vedas, oldest text, goal of life)
//!   ↓ nothing? → fallback listing the known terms
//! ```
//!
//! Everything here is `'static` data and pure functions; a `TermMatcher`
//! can be shared freely between tasks.

pub mod entries;
pub mod matcher;
pub mod messages;
pub mod rules;

pub use entries::{KnowledgeEntry, entries, lookup, term_names};
pub use matcher::{Answer, AnswerSource, TermMatcher, find_vedic_answer};
pub use messages::{FALLBACK_MESSAGE, welcome_message};
pub use rules::PhraseRule;
