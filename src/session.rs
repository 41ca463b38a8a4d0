//! Chat session state and the request-building rule used for file chats.

use crate::gemini::{Content, GenerateContentRequest, GenerationConfig, Part};

/// MIME type assumed for the session file when the upload's type is unknown.
pub const DEFAULT_FILE_MIME_TYPE: &str = "application/pdf";

/// Chat session bound to one uploaded file.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub file_uri: String,
    pub original_mime_type: Option<String>,
    pub system_instruction: String,
    pub history: Vec<Content>,
}

impl ChatSession {
    pub fn new(
        file_uri: String,
        original_mime_type: Option<String>,
        system_instruction: String,
    ) -> Self {
        Self {
            file_uri,
            original_mime_type,
            system_instruction,
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<Content>) -> Self {
        self.history = history;
        self
    }

    /// MIME type to put on the file reference.
    pub fn file_mime_type(&self) -> &str {
        self.original_mime_type.as_deref().unwrap_or_else(|| {
            tracing::debug!(
                "No original MIME type stored for {}, falling back to {}",
                self.file_uri,
                DEFAULT_FILE_MIME_TYPE
            );
            DEFAULT_FILE_MIME_TYPE
        })
    }

    /// Builds the `contents` array for a question.
    ///
    /// Only the opening turn is modelled: it attaches the session file ahead
    /// of the question text. Sessions with history yield no messages.
    pub fn build_chat_contents(&self, question: &str) -> Vec<Content> {
        let mut contents = Vec::new();

        if self.history.is_empty() {
            contents.push(Content::user(vec![
                Part::file_data(self.file_mime_type(), self.file_uri.as_str()),
                Part::text(question),
            ]));
        }

        tracing::debug!(
            "Built {} chat message(s) from session with {} prior message(s)",
            contents.len(),
            self.history.len()
        );
        contents
    }

    pub fn build_request(&self, question: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Content::system_instruction(self.system_instruction.as_str()),
            contents: self.build_chat_contents(question),
            generation_config: GenerationConfig::default(),
        }
    }
}
