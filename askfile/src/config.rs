//! Reading prompt files.
//!
//! A prompt file is TOML with one `[[prompt]]` table per question, in the
//! order the questions should be asked:
//!
//! ```toml
//! [[prompt]]
//! question = "this is question number 1"
//! type = "text"
//!
//! [[prompt]]
//! question = "this is question number 2"
//! type = "text"
//! ```
//!
//! Parsing either yields a fully valid prompt sequence or a descriptive
//! error; a partially valid sequence never reaches the form.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{PromptKind, PromptSpec};

/// Error raised while reading a prompt file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read prompt file: {0}")]
    Read(#[from] std::io::Error),

    /// The file is not valid TOML or is missing required keys.
    #[error("failed to parse prompt file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A prompt declared a type this tool does not know about.
    #[error("unknown prompt type `{name}`")]
    UnknownPromptType { name: String },

    /// The file declares no prompts, so there is no form to show.
    #[error("prompt file declares no prompts")]
    NoPrompts,
}

#[derive(Debug, Deserialize)]
struct PromptsFile {
    #[serde(default, rename = "prompt")]
    prompts: Vec<RawPrompt>,
}

#[derive(Debug, Deserialize)]
struct RawPrompt {
    question: String,

    #[serde(rename = "type")]
    kind: String,
}

/// Read an ordered prompt sequence from a file.
pub fn read_prompts(path: impl AsRef<Path>) -> Result<Vec<PromptSpec>, ConfigError> {
    parse_prompts(&fs::read_to_string(path)?)
}

/// Parse an ordered prompt sequence from TOML source.
pub fn parse_prompts(source: &str) -> Result<Vec<PromptSpec>, ConfigError> {
    let file: PromptsFile = toml::from_str(source)?;

    let mut prompts = Vec::with_capacity(file.prompts.len());
    for raw in file.prompts {
        let kind = match raw.kind.as_str() {
            "text" => PromptKind::Text,
            other => {
                return Err(ConfigError::UnknownPromptType {
                    name: other.to_string(),
                });
            }
        };
        prompts.push(PromptSpec::new(raw.question, kind));
    }

    if prompts.is_empty() {
        return Err(ConfigError::NoPrompts);
    }

    Ok(prompts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prompts_in_declaration_order() {
        let prompts = parse_prompts(
            r#"
            [[prompt]]
            question = "this is question number 1"
            type = "text"

            [[prompt]]
            question = "this is question number 2"
            type = "text"
            "#,
        )
        .unwrap();

        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].question(), "this is question number 1");
        assert_eq!(prompts[1].question(), "this is question number 2");
        assert_eq!(prompts[0].kind(), PromptKind::Text);
    }

    #[test]
    fn unknown_type_names_the_offender() {
        let err = parse_prompts(
            r#"
            [[prompt]]
            question = "pick a color"
            type = "select"
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            &err,
            ConfigError::UnknownPromptType { name } if name == "select"
        ));
        assert_eq!(err.to_string(), "unknown prompt type `select`");
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(matches!(parse_prompts(""), Err(ConfigError::NoPrompts)));
    }

    #[test]
    fn missing_question_key_is_a_parse_error() {
        let err = parse_prompts(
            r#"
            [[prompt]]
            type = "text"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse_prompts("[[prompt").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = read_prompts("/nonexistent/prompts.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
