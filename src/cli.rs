// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::{input::InputReference, settings::FilenameOption};

// ---

/// Prints lines that match a wildcard pattern as a whole.
///
/// Pattern syntax: `*` matches any run of characters, `?` matches a single character,
/// `[abc]` matches one of the listed characters, `\*`, `\?`, `\[` and `\\` match the escaped character.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, `-` discards the default configuration file and all previously specified ones.
    #[arg(long, value_name = "FILE", env = "WCMATCH_CONFIG", num_args = 1)]
    pub config: Vec<String>,

    /// Ignore case distinctions in the pattern and the input.
    #[arg(short, long, env = "WCMATCH_IGNORE_CASE")]
    pub ignore_case: bool,

    /// Select non-matching lines.
    #[arg(short = 'v', long, env = "WCMATCH_INVERT_MATCH")]
    pub invert_match: bool,

    /// Print only a count of selected lines per input.
    #[arg(short, long)]
    pub count: bool,

    /// Treat the pattern as literal text.
    #[arg(short = 'F', long)]
    pub literal: bool,

    /// Prefix output with the input name.
    #[arg(long, value_enum, value_name = "WHEN", overrides_with = "filename")]
    pub filename: Option<FilenameOption>,

    /// Handful alias for --filename=always, overrides --filename option.
    #[arg(short = 'H')]
    pub filename_always: bool,

    /// Wildcard pattern the whole line must match.
    pub pattern: String,

    /// Files to process, `-` stands for standard input which is also used when no files are given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    pub fn filename_option(&self) -> Option<FilenameOption> {
        if self.filename_always {
            Some(FilenameOption::Always)
        } else {
            self.filename
        }
    }

    /// Returns the inputs to process in order.
    ///
    /// Standard input is used when no files are given. It can be read only once,
    /// so repeated `-` entries after the first one are dropped.
    pub fn inputs(&self) -> Vec<InputReference> {
        let mut inputs = Vec::with_capacity(self.files.len().max(1));
        for input in self.files.iter().cloned().map(InputReference::from) {
            if input == InputReference::Stdin && inputs.contains(&InputReference::Stdin) {
                log::debug!("ignoring repeated standard input reference");
                continue;
            }
            inputs.push(input);
        }

        if inputs.is_empty() {
            inputs.push(InputReference::Stdin);
        }

        inputs
    }
}
