//! askfile CLI - ask the questions declared in a prompt file.

use std::path::PathBuf;

use anyhow::Context;
use askfile_form_ratatui::{FormRunner, RunnerError};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "askfile",
    version,
    about = "Ask the questions declared in a prompt file and print the answers"
)]
struct Args {
    /// Path to the TOML prompt file.
    file: PathBuf,

    /// Title shown above the form.
    #[arg(long, default_value = "Prompts")]
    title: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let prompts = askfile::read_prompts(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    match FormRunner::new().with_title(args.title).run(prompts) {
        Ok(answers) => {
            for answer in answers {
                println!("{}: {}", answer.question, answer.value);
            }
            Ok(())
        }
        // User abort, not a failure; exit quietly with no answers.
        Err(RunnerError::Cancelled) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
