use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::compiler::Compiler;
use crate::program::Program;
use crate::quote::quote;

/// Case sensitivity of literal characters and set members in a [`Pattern`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub enum Case {
    #[default]
    Sensitive,
    Insensitive,
}

impl From<bool> for Case {
    /// Converts a "case insensitive" flag.
    fn from(insensitive: bool) -> Self {
        if insensitive { Self::Insensitive } else { Self::Sensitive }
    }
}

// ---

/// A compiled wildcard pattern for matching whole text strings.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters
/// - `?` matches exactly one UTF-8 character
/// - `[...]` matches exactly one of the listed characters
/// - `\` escapes `\`, `?`, `*` and `[`, and is literal otherwise
///
/// The source is compiled once on construction, so a pattern can be matched repeatedly without extra cost.
///
/// Two patterns are equal if their sources and case sensitivity are equal.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.txt");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test?.log");
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("test.log"));
/// ```
#[derive(Clone, Default)]
pub struct Pattern {
    source: String,
    case: Case,
    program: Program,
}

impl Pattern {
    /// Creates a new case-sensitive pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("hello*");
    /// assert!(pattern.matches("hello world"));
    ///
    /// // Escaped wildcards
    /// let pattern = Pattern::new(r"file\*.txt");
    /// assert!(pattern.matches("file*.txt"));
    /// assert!(!pattern.matches("file123.txt"));
    ///
    /// // Unterminated sets are literal
    /// let pattern = Pattern::new("[abc");
    /// assert!(pattern.matches("[abc"));
    /// ```
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_case(raw, Case::Sensitive)
    }

    /// Creates a new pattern from a string with the given case sensitivity.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::{Case, Pattern};
    ///
    /// let pattern = Pattern::with_case("[ab]c", Case::Insensitive);
    /// assert!(pattern.matches("Bc"));
    /// assert!(pattern.matches("aC"));
    /// ```
    pub fn with_case(raw: impl Into<String>, case: impl Into<Case>) -> Self {
        let source = raw.into();
        let case = case.into();
        let program = Compiler::new(case == Case::Insensitive).compile(&source);

        Self { source, case, program }
    }

    /// Creates a case-sensitive pattern matching exactly the given text.
    pub fn literal(text: &str) -> Self {
        Self::new(quote(text))
    }

    /// Returns the source string the pattern was compiled from.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn case(&self) -> Case {
        self.case
    }

    #[inline]
    pub fn is_case_insensitive(&self) -> bool {
        self.case == Case::Insensitive
    }

    /// Tests whether the pattern matches the given text.
    ///
    /// Returns `true` if the entire text matches the pattern, `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("*.rs");
    /// assert!(pattern.matches("main.rs"));
    /// assert!(!pattern.matches("main.rs.bak"));
    ///
    /// // UTF-8 character matching
    /// let pattern = Pattern::new("??");
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("a"));
    /// ```
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.program.matches(text)
    }

    /// Same as [`Pattern::matches`], reads better in predicate position.
    #[inline]
    pub fn test(&self, subject: &str) -> bool {
        self.matches(subject)
    }

    /// Returns a predicate closure testing subjects against the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("b*");
    /// let starts_with_b = pattern.predicate();
    /// assert!(starts_with_b("beta"));
    /// assert!(!starts_with_b("alpha"));
    /// ```
    pub fn predicate(&self) -> impl Fn(&str) -> bool + '_ {
        move |subject: &str| self.matches(subject)
    }

    fn key(&self) -> (&str, Case) {
        (&self.source, self.case)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("case", &self.case)
            .finish()
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Pattern {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
