// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every user-facing system prompt.
pub const TONE_INSTRUCTION: &str = "\
    Be encouraging but honest. Prefer concrete, actionable suggestions over generic advice. \
    Keep answers focused and readable; use short paragraphs or bullet points.";

/// Joins a role description with the shared tone instruction.
pub fn with_tone(role: &str) -> String {
    format!("{role}\n\n{TONE_INSTRUCTION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_tone_keeps_role_first() {
        let prompt = with_tone("You are a reviewer.");
        assert!(prompt.starts_with("You are a reviewer."));
        assert!(prompt.ends_with(TONE_INSTRUCTION));
    }
}
