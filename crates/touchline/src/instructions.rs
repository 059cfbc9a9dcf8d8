//! System Instruction Assembly
//!
//! Builds the fixed instruction string sent with every completion request.
//! Runs exactly once, in `main`, before the listener is bound, so every
//! request handler reads a finished value.

const PERSONA: &str = "You are a helpful chatbot for a recreational youth soccer league. \
     You assist parents, coaches, and referees by answering questions based on the league rules. ";

const RULES_PREAMBLE: &str = "Here are the league rules for reference:\n\n";

const CAPABILITIES: &str = "\n\nUse this information to answer questions about league rules. \
     For coaching best practices or equipment recommendations, use your web search tool to \
     find recent, relevant information. Provide concise, friendly responses.";

/// Compose the system instruction around the rules text.
///
/// The rules text is embedded verbatim, whatever it contains; any
/// degraded-load substitution happens upstream via
/// [`crate::RulesPolicy`].
pub fn build_instructions(rules_text: &str) -> String {
    let mut out = String::with_capacity(
        PERSONA.len() + RULES_PREAMBLE.len() + rules_text.len() + CAPABILITIES.len(),
    );
    out.push_str(PERSONA);
    out.push_str(RULES_PREAMBLE);
    out.push_str(rules_text);
    out.push_str(CAPABILITIES);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_rules_verbatim() {
        let rules = "Rule 1: U10 games are 50 minutes.\nRule 2: No slide tackles.";
        let instructions = build_instructions(rules);
        assert!(instructions.contains(rules));
    }

    #[test]
    fn test_error_sentinel_is_embedded_unchanged() {
        let sentinel = "Error loading rules document: file not found";
        let instructions = build_instructions(sentinel);
        assert!(instructions.contains(sentinel));
    }

    #[test]
    fn test_empty_rules_still_produce_full_frame() {
        let instructions = build_instructions("");
        assert!(instructions.starts_with("You are a helpful chatbot"));
        assert!(instructions.ends_with("concise, friendly responses."));
        assert!(instructions.contains("league rules for reference"));
        assert!(instructions.contains("web search tool"));
    }
}
