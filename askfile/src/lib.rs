//! Core types for askfile.
//!
//! askfile reads a declarative prompt file and drives an interactive
//! terminal form from it: one text field per declared question, focus moving
//! between the fields and a final submit control, answers read out once the
//! user confirms.
//!
//! This crate provides the presentation-agnostic pieces:
//! - [`PromptSpec`] and [`PromptKind`] - Immutable question descriptors
//! - [`config`] - Reading the `[[prompt]]` tables of a prompt file
//! - [`TextField`] - The single-field editing capability
//! - [`Form`] - The focus/navigation state machine and its [`Outcome`]s
//!
//! Terminal rendering and the blocking event loop live in frontend crates
//! (for example `askfile-form-ratatui`), which classify raw key events into
//! [`FormInput`] values and feed them to [`Form::handle_input`].

mod prompt;
pub use prompt::{PromptKind, PromptSpec};

pub mod config;
pub use config::{ConfigError, parse_prompts, read_prompts};

mod text_field;
pub use text_field::TextField;

mod input;
pub use input::{EditOp, FormInput, NavKey};

mod form;
pub use form::{ANSWER_CHAR_LIMIT, Answer, Form, FormError, Outcome};
