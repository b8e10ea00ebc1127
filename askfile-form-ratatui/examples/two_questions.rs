//! Run a two-question form without a prompt file.

use askfile::PromptSpec;
use askfile_form_ratatui::{FormRunner, RunnerError};

fn main() -> anyhow::Result<()> {
    let prompts = vec![
        PromptSpec::text("this is question number 1"),
        PromptSpec::text("this is question number 2"),
    ];

    match FormRunner::new().with_title("Example").run(prompts) {
        Ok(answers) => {
            for answer in answers {
                println!("{}: {}", answer.question, answer.value);
            }
        }
        Err(RunnerError::Cancelled) => println!("cancelled"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
