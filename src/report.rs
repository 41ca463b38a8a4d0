//! Console report comparing the reference Gemini chat payload with the one
//! our session logic builds.

use crate::gemini::{Content, GenerateContentRequest, GenerationConfig, Part};
use crate::notes;
use crate::session::ChatSession;
use crate::Result;
use serde::Serialize;
use std::io::Write;

pub const SAMPLE_QUESTION: &str = "この画像について教えてください";

/// Well-formed request with a file reference, as documented by Gemini.
pub fn reference_payload() -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: Content::system_instruction("システム指示文"),
        contents: vec![Content::user(vec![
            Part::file_data("image/jpeg", "files/xyz123"),
            Part::text(SAMPLE_QUESTION),
        ])],
        generation_config: GenerationConfig::default(),
    }
}

/// Fresh session over an uploaded JPEG, as the chat flow creates it.
pub fn mock_session() -> ChatSession {
    ChatSession::new(
        "files/mock-test-file-123".to_string(),
        Some("image/jpeg".to_string()),
        "テスト用システム指示".to_string(),
    )
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_section<W: Write>(out: &mut W, title: &str, body: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {} ===", title)?;
    for line in body.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Prints the reference payload followed by the common-issues list and the
/// validation checklist.
pub fn emit_reference_format<W: Write>(out: &mut W) -> Result<GenerateContentRequest> {
    let payload = reference_payload();

    writeln!(out, "=== Gemini Chat API Format Validation ===")?;
    writeln!(out)?;
    writeln!(out, "Expected Gemini Chat API Format:")?;
    write_json(out, &payload)?;

    write_section(out, "Common Issues to Check", notes::COMMON_ISSUES)?;
    write_section(out, "Validation Checklist", notes::VALIDATION_CHECKLIST)?;

    Ok(payload)
}

/// Builds a request from [`mock_session`] and prints it.
pub fn emit_simulated_payload<W: Write>(out: &mut W) -> Result<GenerateContentRequest> {
    let session = mock_session();
    let payload = session.build_request(SAMPLE_QUESTION);

    writeln!(out)?;
    writeln!(out, "=== Our Implementation Output ===")?;
    write_json(out, &payload)?;

    Ok(payload)
}

pub fn emit_key_improvements<W: Write>(out: &mut W) -> Result<()> {
    write_section(out, "Key Improvements Made", notes::KEY_IMPROVEMENTS)
}

/// Runs the whole report: reference, simulation, then the footer.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let reference = emit_reference_format(out)?;
    let simulated = emit_simulated_payload(out)?;
    emit_key_improvements(out)?;
    out.flush()?;

    tracing::debug!(
        "Reference has {} message(s), simulation has {} message(s)",
        reference.contents.len(),
        simulated.contents.len()
    );
    Ok(())
}
