//! Phrase rules — canned answers for common questions not tied to one term.

/// A trigger predicate over the normalized query and its fixed response.
#[derive(Debug, Clone, Copy)]
pub struct PhraseRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub response: &'static str,
}

/// Phrases that mark a query as a question about a term.
pub const QUESTION_PHRASES: &[&str] = &["what is", "what are", "tell me about", "explain"];

/// Whether the normalized query is phrased as a question about a term.
pub fn is_question(query: &str) -> bool {
    QUESTION_PHRASES.iter().any(|p| query.contains(p))
}

fn contains_any(query: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| query.contains(n))
}

static RULES: &[PhraseRule] = &[
    PhraseRule {
        name: "vedas_count",
        matches: |q: &str| contains_any(q, &["how many vedas", "number of vedas"]),
        response: "📚 There are **four main Vedas**: Rigveda, Samaveda, Yajurveda, and Atharvaveda. Each serves a specific purpose in Vedic tradition and contains different types of knowledge and practices.",
    },
    PhraseRule {
        name: "oldest_text",
        matches: |q: &str| q.contains("oldest") && contains_any(q, &["text", "scripture"]),
        response: "📜 The **Rigveda** is considered the oldest of the Vedic texts, with some hymns dating back to around 1500 BCE or earlier. It forms the foundation of Vedic literature and Hindu philosophy.",
    },
    PhraseRule {
        name: "goal_of_life",
        matches: |q: &str| contains_any(q, &["goal of life", "purpose of life"]),
        response: "🎯 According to Vedic philosophy, there are **four main goals of human life** (Purusharthas):\n\n1. **Dharma** - Righteous living\n2. **Artha** - Material prosperity\n3. **Kama** - Emotional fulfillment\n4. **Moksha** - Spiritual liberation\n\nMoksha is considered the ultimate goal.",
    },
];

/// All phrase rules, in evaluation order.
pub fn rules() -> &'static [PhraseRule] {
    RULES
}

/// First rule whose trigger matches the normalized query.
pub fn find_rule(query: &str) -> Option<&'static PhraseRule> {
    RULES.iter().find(|r| (r.matches)(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["vedas_count", "oldest_text", "goal_of_life"]);
    }

    #[test]
    fn test_find_rule() {
        assert_eq!(find_rule("number of vedas?").map(|r| r.name), Some("vedas_count"));
        assert_eq!(find_rule("the oldest scripture").map(|r| r.name), Some("oldest_text"));
        assert_eq!(find_rule("purpose of life").map(|r| r.name), Some("goal_of_life"));
    }

    #[test]
    fn test_oldest_needs_text_or_scripture() {
        assert!(find_rule("the oldest temple").is_none());
        assert!(find_rule("a sacred text").is_none());
    }

    #[test]
    fn test_first_rule_wins() {
        // Triggers both "oldest_text" and "goal_of_life".
        let q = "oldest text on the goal of life";
        assert_eq!(find_rule(q).map(|r| r.name), Some("oldest_text"));
    }

    #[test]
    fn test_is_question() {
        assert!(is_question("what is karma"));
        assert!(is_question("please explain yoga"));
        assert!(!is_question("karma"));
    }
}
