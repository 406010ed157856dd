const PROMPT_TEMPLATE: &str = r#"You are a genomics expert. Analyze this DNA sequence and predict its functions.

DNA Sequence: {sequence}

Provide a detailed analysis in JSON format:
{
  "sequence_stats": {
    "length": <number>,
    "gc_content": <percentage as number>
  },
  "predictions": [
    {
      "name": "<function name>",
      "confidence": <0-100>,
      "category": "<Gene Regulation|RNA Processing|Chromatin Structure|Epigenetic Regulation>",
      "mechanism": "<detailed 3-4 sentence explanation>",
      "evidence": ["<evidence 1>", "<evidence 2>", "<evidence 3>"],
      "diseases": ["<disease 1>", "<disease 2>"]
    }
  ],
  "regulatory_network": {
    "genes": ["<gene1>", "<gene2>", "<gene3>", "<gene4>", "<gene5>"],
    "relationships": [
      {"from": "DNA_SEQUENCE", "to": "<gene>", "type": "activation|repression", "strength": <0-1>}
    ]
  },
  "hypotheses": [
    {
      "statement": "<hypothesis>",
      "method": "<experimental approach>",
      "expected_outcome": "<outcome>",
      "resources": "<what's needed>",
      "timeline": "<time estimate>"
    }
  ]
}

Return ONLY valid JSON, no markdown formatting or code blocks."#;

/// Instruction text sent to the model for one cleaned sequence
pub fn build_prompt(sequence: &str) -> String {
    PROMPT_TEMPLATE.replace("{sequence}", sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_sequence_once() {
        let prompt = build_prompt("ACGTTGCA");
        assert_eq!(prompt.matches("ACGTTGCA").count(), 1);
        assert!(prompt.contains("DNA Sequence: ACGTTGCA\n"));
        assert!(prompt.ends_with("no markdown formatting or code blocks."));
        assert!(!prompt.contains("{sequence}"));
    }
}
