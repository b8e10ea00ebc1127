/// The declared answer type of a prompt.
///
/// Only free-form text exists today. A prompt file declaring anything else
/// is a configuration error, never a runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Single-line free-form text.
    Text,
}

/// Immutable descriptor of one question in a prompt file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    /// The prompt text shown as the field's placeholder.
    question: String,

    /// The declared answer type.
    kind: PromptKind,
}

impl PromptSpec {
    /// Create a new prompt descriptor.
    pub fn new(question: impl Into<String>, kind: PromptKind) -> Self {
        Self {
            question: question.into(),
            kind,
        }
    }

    /// Create a text prompt.
    pub fn text(question: impl Into<String>) -> Self {
        Self::new(question, PromptKind::Text)
    }

    /// Get the question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Get the declared answer type.
    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    pub(crate) fn into_question(self) -> String {
        self.question
    }
}
