//! Fixed system prompts for the two Messages API calls.
//!
//! Both prompts are constants: the generation prompt teaches the model the
//! labeling scheme, and the parsing prompt specifies the exact JSON shape
//! expected back. Formatting compliance (word counts, one tag per thought)
//! is the model's responsibility; nothing here is enforced locally.

/// System prompt for the generation call: reason step-by-step, tag every
/// thought with one label from the fixed set, finish with a FINAL: line.
pub const GENERATE_SYSTEM: &str = r#"You are a language model that reasons step-by-step.
After every thought, output a tag on its own line in the form
[LABEL] where LABEL is one of {
WORKING_MEMORY, SEMANTIC_RETRIEVAL, LOGICAL_REASONING, PATTERN_RECOGNITION,
ANALOGICAL_REASONING, ERROR_MONITORING, PLANNING, EVALUATION,
CREATIVE_SYNTHESIS, ATTENTION_CONTROL, OTHER
}

Guidelines:
- A thought should be 30 words or fewer.
- Emit exactly one tag per thought, on its own line.
- Continue thinking until you have a final answer; then prefix the answer with FINAL:
- Choose a label if possible; if really uncertain, output [OTHER]

Example:
THOUGHT 1: Let me keep track of the assumptions we have so far...
[WORKING_MEMORY]
THOUGHT 2: If X is true, then Y must follow...
[LOGICAL_REASONING]
THOUGHT 3: This reminds me of the classic trolley problem...
[ANALOGICAL_REASONING]
FINAL: Therefore the best option is...
"#;

/// System prompt for the parsing call: turn a labeled transcript into a bare
/// JSON array of [thought text, label] pairs.
pub const PARSE_SYSTEM: &str = r#"You will be given a single string containing multiple "THOUGHT" entries, each of which looks like:

THOUGHT <n>: <some text>
[<LABEL>]

Your task is to parse that string and return only a JSON array of two-element arrays, where each element is:

1. The thought text (with no "THOUGHT n:" prefix and with all whitespace/newlines collapsed into single spaces)
2. The label (no brackets)

For example, given:

THOUGHT 1: The ocean is salty because water dissolves minerals from rocks and carries them to the sea.
[SEMANTIC_RETRIEVAL]

THOUGHT 2: Let me trace the water cycle: rain falls on land, flows through rivers, picks up dissolved salts.
[LOGICAL_REASONING]

You should output:

[
    ["The ocean is salty because water dissolves minerals from rocks and carries them to the sea.", "SEMANTIC_RETRIEVAL"],
    ["Let me trace the water cycle: rain falls on land, flows through rivers, picks up dissolved salts.", "LOGICAL_REASONING"]
]

Do not include any extra text, explanation, or formatting. Just the JSON array.
"#;
