// std imports
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, stdin};
use std::path::{Path, PathBuf};

// local imports
use crate::error::*;

// ---

/// Reference to an input source, not yet opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Returns a human readable description of the input for diagnostics.
    pub fn description(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".into(),
            Self::File(path) => format!("file {:?}", path),
        }
    }

    /// Opens the input for reading.
    pub fn open(&self) -> Result<Input> {
        let stream: Box<dyn BufRead + Send> = match self {
            Self::Stdin => Box::new(BufReader::new(stdin())),
            Self::File(path) => Box::new(BufReader::new(self.open_file(path)?)),
        };

        log::debug!("opened {}", self.description());

        Ok(Input::new(self.clone(), stream))
    }

    fn open_file(&self, path: &Path) -> Result<File> {
        let meta = fs::metadata(path).map_err(|e| self.error(e, "failed to get information on"))?;
        if meta.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is a directory", self.description()),
            )
            .into());
        }

        File::open(path).map_err(|e| self.error(e, "failed to open"))
    }

    fn error(&self, err: io::Error, action: &str) -> Error {
        match (err.kind(), self) {
            (io::ErrorKind::NotFound, Self::File(path)) => Error::FileNotFoundError {
                filename: path.to_string_lossy().into(),
            },
            _ => io::Error::new(err.kind(), format!("{} {}: {}", action, self.description(), err)).into(),
        }
    }
}

impl fmt::Display for InputReference {
    /// Writes the name used to prefix output lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("(standard input)"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<PathBuf> for InputReference {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

impl From<&str> for InputReference {
    fn from(path: &str) -> Self {
        PathBuf::from(path).into()
    }
}

// ---

/// An opened input stream.
pub struct Input {
    pub reference: InputReference,
    pub stream: Box<dyn BufRead + Send>,
}

impl Input {
    pub fn new(reference: InputReference, stream: Box<dyn BufRead + Send>) -> Self {
        Self { reference, stream }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("reference", &self.reference)
            .finish_non_exhaustive()
    }
}
