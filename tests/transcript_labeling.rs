//! Integration tests for the two labeling operations.
//!
//! The external service is non-deterministic, so these tests exercise the
//! local contract through the `Completions` seam with a canned backend
//! standing in for the Messages API.

use std::cell::RefCell;

use thought_labeler::client::Completions;
use thought_labeler::error::{Result, ThoughtLabelerError};
use thought_labeler::generate::generate_thoughts;
use thought_labeler::labels::{Label, ThoughtRecord};
use thought_labeler::parse::parse_transcript;

/// Canned backend that records every (system, user) pair it is sent.
struct FakeService {
    calls: RefCell<Vec<(String, String)>>,
    reply: String,
}

impl FakeService {
    fn replying(reply: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            reply: reply.to_string(),
        }
    }
}

impl Completions for FakeService {
    fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.calls
            .borrow_mut()
            .push((system.to_string(), user.to_string()));
        Ok(self.reply.clone())
    }
}

const TWO_THOUGHT_TRANSCRIPT: &str = "\
THOUGHT 1: The ocean is salty because water dissolves minerals from rocks.
[SEMANTIC_RETRIEVAL]

THOUGHT 2: Let me trace the water cycle: rain falls on land, flows through rivers.
[LOGICAL_REASONING]

FINAL: Rivers deliver dissolved minerals and evaporation concentrates them.";

#[test]
fn generate_then_parse_flow_shares_no_state() {
    // Two independent backends standing in for two independent API calls
    let generator = FakeService::replying(TWO_THOUGHT_TRANSCRIPT);
    let transcript = generate_thoughts(&generator, "Why is the ocean salty?").unwrap();
    assert_eq!(transcript, TWO_THOUGHT_TRANSCRIPT);

    let parser = FakeService::replying(
        r#"[["The ocean is salty because water dissolves minerals from rocks.","SEMANTIC_RETRIEVAL"],["Let me trace the water cycle: rain falls on land, flows through rivers.","LOGICAL_REASONING"]]"#,
    );
    let records = parse_transcript(&parser, &transcript).unwrap();

    assert_eq!(
        records,
        vec![
            ThoughtRecord {
                text: "The ocean is salty because water dissolves minerals from rocks."
                    .to_string(),
                label: Label::SemanticRetrieval,
            },
            ThoughtRecord {
                text: "Let me trace the water cycle: rain falls on land, flows through rivers."
                    .to_string(),
                label: Label::LogicalReasoning,
            },
        ]
    );
}

#[test]
fn operations_send_the_transcript_and_query_verbatim() {
    let generator = FakeService::replying("FINAL: stub");
    generate_thoughts(&generator, "  a query with   odd spacing  ").unwrap();
    assert_eq!(
        generator.calls.borrow()[0].1,
        "  a query with   odd spacing  "
    );

    let parser = FakeService::replying("[]");
    parse_transcript(&parser, TWO_THOUGHT_TRANSCRIPT).unwrap();
    assert_eq!(parser.calls.borrow()[0].1, TWO_THOUGHT_TRANSCRIPT);
}

#[test]
fn operations_use_distinct_fixed_system_prompts() {
    let generator = FakeService::replying("FINAL: stub");
    generate_thoughts(&generator, "q").unwrap();
    let parser = FakeService::replying("[]");
    parse_transcript(&parser, "t").unwrap();

    let generate_system = generator.calls.borrow()[0].0.clone();
    let parse_system = parser.calls.borrow()[0].0.clone();
    assert_ne!(generate_system, parse_system);
    // The generation prompt teaches the full label set
    for label in Label::ALL {
        assert!(generate_system.contains(label.as_str()));
    }
    // The parsing prompt pins the output shape
    assert!(parse_system.contains("two-element arrays"));
}

#[test]
fn ordered_parse_of_many_blocks_preserves_order() {
    let reply = r#"[
        ["first", "PLANNING"],
        ["second", "EVALUATION"],
        ["third", "ERROR_MONITORING"],
        ["fourth", "CREATIVE_SYNTHESIS"],
        ["fifth", "ATTENTION_CONTROL"]
    ]"#;
    let parser = FakeService::replying(reply);
    let records = parse_transcript(&parser, "t").unwrap();

    let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third", "fourth", "fifth"]);
    assert_eq!(records[3].label, Label::CreativeSynthesis);
}

#[test]
fn non_json_reply_fails_without_partial_results() {
    let parser = FakeService::replying("Sorry, I cannot comply.");
    let err = parse_transcript(&parser, TWO_THOUGHT_TRANSCRIPT).unwrap_err();
    assert!(matches!(err, ThoughtLabelerError::Parse { .. }));
}

#[test]
fn service_errors_propagate_through_both_operations() {
    struct DownService;
    impl Completions for DownService {
        fn complete(&self, _system: &str, _user: &str) -> Result<String> {
            Err(ThoughtLabelerError::Api {
                message: "quota exceeded".into(),
            })
        }
    }

    assert!(matches!(
        generate_thoughts(&DownService, "q").unwrap_err(),
        ThoughtLabelerError::Api { .. }
    ));
    assert!(matches!(
        parse_transcript(&DownService, "t").unwrap_err(),
        ThoughtLabelerError::Api { .. }
    ));
}
