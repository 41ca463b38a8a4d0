use gemini_format_check::{
    gemini::{GenerationConfig, Part, Role},
    report::{self, emit_reference_format, emit_simulated_payload},
    session::{ChatSession, DEFAULT_FILE_MIME_TYPE},
};
use pretty_assertions::assert_eq;

fn full_report() -> String {
    let mut buf = Vec::new();
    report::run(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_full_report_sections_in_order() {
    let text = full_report();

    let headings = [
        "=== Gemini Chat API Format Validation ===",
        "Expected Gemini Chat API Format:",
        "=== Common Issues to Check ===",
        "=== Validation Checklist ===",
        "=== Our Implementation Output ===",
        "=== Key Improvements Made ===",
    ];
    let positions: Vec<usize> = headings
        .iter()
        .map(|h| text.find(h).unwrap_or_else(|| panic!("missing heading: {}", h)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    // Two pretty-printed JSON blocks.
    assert_eq!(text.matches("\n{\n").count(), 2);
    assert!(text.ends_with("5. Proper file state checking before chat usage\n"));
}

#[test]
fn test_full_report_is_identical_across_runs() {
    assert_eq!(full_report(), full_report());
}

#[test]
fn test_both_payloads_share_generation_config() {
    let mut sink = Vec::new();
    let reference = emit_reference_format(&mut sink).unwrap();
    let simulated = emit_simulated_payload(&mut sink).unwrap();

    let expected = GenerationConfig {
        temperature: 0.2,
        top_k: 40,
        top_p: 0.95,
        max_output_tokens: 2048,
    };
    assert_eq!(reference.generation_config, expected);
    assert_eq!(simulated.generation_config, expected);
}

#[test]
fn test_simulated_message_puts_file_before_text() {
    let simulated = emit_simulated_payload(&mut std::io::sink()).unwrap();

    assert_eq!(simulated.contents.len(), 1);
    let message = &simulated.contents[0];
    assert_eq!(message.role, Some(Role::User));
    assert!(matches!(message.parts[0], Part::FileData { .. }));
    assert_eq!(message.parts[1], Part::text(report::SAMPLE_QUESTION));
}

#[test]
fn test_session_without_mime_type_uses_fallback() {
    let session = ChatSession {
        original_mime_type: None,
        ..report::mock_session()
    };
    let request = session.build_request(report::SAMPLE_QUESTION);

    assert_eq!(
        request.contents[0].parts[0],
        Part::file_data(DEFAULT_FILE_MIME_TYPE, "files/mock-test-file-123")
    );
}
