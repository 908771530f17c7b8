// std imports
use std::path::{Path, PathBuf};

// local imports
use crate::{
    error::Result,
    settings::{Settings, SourceFile},
};

// ---

pub const APP_NAME: &str = "wcmatch";

/// Returns the path of the default configuration file without extension.
///
/// Any of the supported formats may be used, i.e. `config.toml`, `config.yaml` or `config.json`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config"))
}

/// Creates a loader for the given configuration files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|path| path.as_ref().to_owned()).collect())
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the default configuration file.
    pub fn no_default(self, no_default: bool) -> Self {
        Self { no_default, ..self }
    }

    pub fn load(self) -> Result<Settings> {
        Settings::load(self.sources())
    }

    fn sources(&self) -> Vec<SourceFile> {
        let default = (!self.no_default)
            .then(default_path)
            .flatten()
            .map(|path| SourceFile::new(path).required(false));

        default
            .into_iter()
            .chain(self.paths.iter().map(SourceFile::new))
            .collect()
    }
}

/// Splits `--config` values at the last reset marker (`-` or an empty string).
///
/// Returns the values that remain in effect and whether the default configuration file is discarded.
pub fn effective<S: AsRef<str>>(values: &[S]) -> (&[S], bool) {
    match values.iter().rposition(|x| x.as_ref().is_empty() || x.as_ref() == "-") {
        Some(i) => (&values[i + 1..], true),
        None => (values, false),
    }
}

#[cfg(test)]
mod tests;
