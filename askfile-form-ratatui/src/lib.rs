//! # askfile-form-ratatui
//!
//! Ratatui frontend for askfile.
//!
//! Displays every prompt at once, one field per line, and drives the
//! `askfile` form state machine from crossterm key events. Tab/Shift+Tab
//! and the arrow keys move focus, enter on the submit control submits,
//! esc or ctrl+c cancels.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use askfile_form_ratatui::FormRunner;
//!
//! fn main() -> anyhow::Result<()> {
//!     let prompts = askfile::read_prompts("prompts.toml")?;
//!     let answers = FormRunner::new().with_title("Setup").run(prompts)?;
//!     for answer in answers {
//!         println!("{}: {}", answer.question, answer.value);
//!     }
//!     Ok(())
//! }
//! ```

mod runner;

pub use runner::{FormRunner, RunnerError, Theme, classify};
