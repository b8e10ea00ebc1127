//! The form state machine.

use crate::{FormInput, NavKey, PromptSpec, TextField};

/// Character cap applied to every answer.
pub const ANSWER_CHAR_LIMIT: usize = 32;

/// Error raised when a form cannot be constructed.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A form needs at least one prompt to have anywhere to put focus.
    #[error("cannot build a form from an empty prompt list")]
    NoPrompts,
}

/// Per-event result signal, driving the surrounding session loop.
///
/// The loop must stop feeding events as soon as it sees [`Submit`](Outcome::Submit)
/// or [`Cancel`](Outcome::Cancel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep feeding events.
    Continue,

    /// The user confirmed on the submit control; the answers are final.
    Submit,

    /// The user aborted; no answers are valid.
    Cancel,
}

/// One answered question, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub question: String,
    pub value: String,
}

/// An ordered set of text fields with a single focus, plus a submit control.
///
/// Focus is an index in `0..=N` where `N` is the number of fields: values
/// below `N` address a field, `N` itself is the submit control. Treating
/// the submit control as one more stop lets navigation wrap over `N + 1`
/// positions with no special case for the last field.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<TextField>,
    focus: usize,
}

impl Form {
    /// Build a form with one text field per prompt, focused on the first.
    ///
    /// An empty prompt sequence is a caller error and is rejected here
    /// rather than producing a form with nowhere to put focus.
    pub fn new(prompts: impl IntoIterator<Item = PromptSpec>) -> Result<Self, FormError> {
        let mut fields: Vec<TextField> = prompts
            .into_iter()
            .map(|prompt| TextField::new(prompt.into_question(), ANSWER_CHAR_LIMIT))
            .collect();

        if fields.is_empty() {
            return Err(FormError::NoPrompts);
        }

        fields[0].focus();
        Ok(Self { fields, focus: 0 })
    }

    /// Read-only view of the fields, in question order.
    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Current focus index; equals [`field_count`](Self::field_count) while
    /// the submit control is focused.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn submit_focused(&self) -> bool {
        self.focus == self.fields.len()
    }

    /// Consume one input event and report how the session should proceed.
    ///
    /// Cancellation wins over everything and leaves the state untouched.
    /// Navigation moves focus with wraparound; enter on the submit control
    /// submits, enter anywhere else navigates forward. Edits are forwarded
    /// to every field - only the focused field consumes them, so no focus
    /// filtering happens here.
    pub fn handle_input(&mut self, input: FormInput) -> Outcome {
        match input {
            FormInput::Cancel => Outcome::Cancel,
            FormInput::Nav(key) => self.navigate(key),
            FormInput::Edit(op) => {
                for field in &mut self.fields {
                    field.handle_edit(op);
                }
                Outcome::Continue
            }
        }
    }

    fn navigate(&mut self, key: NavKey) -> Outcome {
        if key == NavKey::Confirm && self.submit_focused() {
            return Outcome::Submit;
        }

        // The submit control is a virtual extra stop, so this is a single
        // wrapping walk over `field_count() + 1` positions.
        let stops = self.fields.len() + 1;
        self.focus = match key {
            NavKey::Previous => (self.focus + stops - 1) % stops,
            NavKey::Next | NavKey::Confirm => (self.focus + 1) % stops,
        };

        for (i, field) in self.fields.iter_mut().enumerate() {
            if i == self.focus {
                field.focus();
            } else {
                field.blur();
            }
        }

        Outcome::Continue
    }

    /// Consume the form, pairing each question with its entered value.
    pub fn into_answers(self) -> Vec<Answer> {
        self.fields
            .into_iter()
            .map(|field| {
                let (question, value) = field.into_parts();
                Answer { question, value }
            })
            .collect()
    }
}
