// std imports
use std::path::PathBuf;

// third-party imports
use clap::ValueEnum;
use config::{Config, File};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

/// Persistent defaults for command-line options.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    pub ignore_case: bool,
    pub invert_match: bool,
    pub with_filename: FilenameOption,
}

impl Settings {
    /// Loads settings from the given sources, later sources override earlier ones.
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let mut builder = Config::builder();
        for source in sources {
            log::debug!("adding configuration source {:?}", source);
            builder = builder.add_source(File::with_name(&source.filename.to_string_lossy()).required(source.required));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

// ---

/// When to prefix output with the input name.
#[derive(ValueEnum, Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FilenameOption {
    /// Only when there is more than one input.
    #[default]
    Auto,
    Always,
    Never,
}

impl FilenameOption {
    pub fn resolve(self, inputs: usize) -> bool {
        match self {
            Self::Auto => inputs > 1,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

// ---

/// A configuration file source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub filename: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}
