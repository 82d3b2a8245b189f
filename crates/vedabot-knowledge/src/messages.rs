//! Fixed bot texts: the `/start` greeting and the fallback answer.

use crate::entries::entries;

/// Returned when neither a term nor a phrase rule matches.
pub const FALLBACK_MESSAGE: &str = "🤔 I don't have specific information about that topic in my current knowledge base.

However, I can help you with these Vedic concepts:
• Vedas, Dharma, Karma, Moksha
• Atman, Brahman, Upanishads
• Yoga, Samadhi, Samsara

Try asking about any of these terms, or rephrase your question. For example:
\"What is Dharma?\" or \"Tell me about Moksha\"

🙏 Feel free to ask about any Vedic concept you're curious about!";

/// Greeting for `/start`, addressed to the user's first name.
pub fn welcome_message(first_name: &str) -> String {
    let concepts: String = entries()
        .iter()
        .map(|e| format!("• {} - {}\n", e.title, e.summary))
        .collect();

    format!(
        "🕉️ Namaste {first_name}!

Welcome to the Vedas Knowledge Bot!

I am here to help you learn about ancient Vedic wisdom and philosophy. You can ask me questions about:

📚 **Vedic Concepts I Know:**
{concepts}
Simply type your question or the term you'd like to learn about!

For example, try asking: \"What is Karma?\" or \"Tell me about the Vedas\"

🙏 May your journey in Vedic wisdom bring you peace and understanding!"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_interpolates_name() {
        let msg = welcome_message("Arjuna");
        assert!(msg.starts_with("🕉️ Namaste Arjuna!"));
        assert!(msg.contains("• Vedas - The ancient sacred texts\n"));
        assert!(msg.contains("• Samsara - Cycle of birth and death\n\nSimply type"));
    }

    #[test]
    fn test_welcome_lists_every_term() {
        let msg = welcome_message("x");
        for e in entries() {
            assert!(msg.contains(e.title), "missing {}", e.title);
        }
    }

    #[test]
    fn test_fallback_lists_terms() {
        for e in entries() {
            assert!(FALLBACK_MESSAGE.contains(e.title));
        }
    }
}
