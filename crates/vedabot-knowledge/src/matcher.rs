//! Term matcher — maps a free-text query to a knowledge entry, a phrase rule
//! or the fallback text.

use vedabot_core::config::MatchPrecedence;

use crate::entries::{KnowledgeEntry, entries};
use crate::messages::FALLBACK_MESSAGE;
use crate::rules::{find_rule, is_question};

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    /// A knowledge entry. `question` is set when the query used a question
    /// phrase ("what is", "explain", ...).
    Term { term: &'static str, question: bool },
    /// A phrase rule, by name.
    Phrase(&'static str),
    Fallback,
}

/// A resolved answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub source: AnswerSource,
}

/// Stateless matcher over the static knowledge table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermMatcher {
    precedence: MatchPrecedence,
}

impl TermMatcher {
    pub fn new(precedence: MatchPrecedence) -> Self {
        Self { precedence }
    }

    /// Answer text for a raw query. Never empty.
    pub fn answer(&self, query: &str) -> String {
        self.resolve(query).text
    }

    /// Resolve a raw query to an answer and its source.
    pub fn resolve(&self, query: &str) -> Answer {
        let query = normalize(query);

        let found = match self.precedence {
            MatchPrecedence::TermsFirst => match_term(&query).or_else(|| match_phrase(&query)),
            MatchPrecedence::PhraseRulesFirst => {
                match_phrase(&query).or_else(|| match_term(&query))
            }
        };

        found.unwrap_or_else(|| Answer {
            text: FALLBACK_MESSAGE.to_string(),
            source: AnswerSource::Fallback,
        })
    }
}

/// Answer a query with the default (terms-first) matcher.
pub fn find_vedic_answer(query: &str) -> String {
    TermMatcher::default().answer(query)
}

fn normalize(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

/// First entry, in table order, whose term occurs in the query.
fn first_entry_in(query: &str) -> Option<&'static KnowledgeEntry> {
    entries().iter().find(|e| query.contains(e.term))
}

fn match_term(query: &str) -> Option<Answer> {
    let entry = first_entry_in(query)?;
    Some(Answer {
        text: entry.render(),
        source: AnswerSource::Term {
            term: entry.term,
            question: is_question(query),
        },
    })
}

fn match_phrase(query: &str) -> Option<Answer> {
    let rule = find_rule(query)?;
    Some(Answer {
        text: rule.response.to_string(),
        source: AnswerSource::Phrase(rule.name),
    })
}
