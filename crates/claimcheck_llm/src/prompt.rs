//! Prompt templates for the fact-check exchange.

/// System instruction: asks the model for the three-part labeled layout
/// the interpreter prefers.
pub const FACT_CHECK_SYSTEM: &str = r#"You are a fact-checking assistant. Your job is to verify the accuracy of the given information and provide a clear verdict. Structure your response in three parts:

1. A clear verdict (True, Partially True, False, or Undetermined)
2. A detailed explanation of your reasoning
3. Any necessary corrections to the information

Format your response exactly as follows:

VERDICT: [your verdict here]

EXPLANATION: [your detailed explanation]

CORRECTIONS: [any corrections to the information]"#;

/// User message embedding the claim to check.
pub fn build_user_prompt(claim: &str) -> String {
    format!("Please fact-check the following information: {claim}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_names_all_sections() {
        for marker in ["VERDICT:", "EXPLANATION:", "CORRECTIONS:"] {
            assert!(FACT_CHECK_SYSTEM.contains(marker));
        }
    }

    #[test]
    fn user_prompt_embeds_claim() {
        let prompt = build_user_prompt("water boils at 90C");
        assert!(prompt.contains("water boils at 90C"));
        assert!(prompt.starts_with("Please fact-check"));
    }
}
