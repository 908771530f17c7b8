//! A lightweight wildcard pattern matching library.
//!
//! A pattern is compiled once and then tested against any number of candidate strings.
//! A match always covers the whole candidate, never a substring of it.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `?` - Matches exactly one UTF-8 character
//! - `[abc]` - Matches exactly one of the listed characters, `\]` stands for `]` inside a set
//! - `\\`, `\?`, `\*`, `\[` - Escaped literal characters
//! - Any other character matches itself, including a backslash that does not start one of the escapes above
//!
//! There are no ranges and no negation inside sets. A `[` that does not start a complete set is a literal.
//! Every string is a valid pattern.
//!
//! # Examples
//!
//! ```
//! use wildcard::{Case, Pattern};
//!
//! let pattern = Pattern::new("*.[ch]");
//! assert!(pattern.matches("main.c"));
//! assert!(pattern.matches("util.h"));
//! assert!(!pattern.matches("main.rs"));
//!
//! let pattern = Pattern::with_case("Fairy?ake*", Case::Insensitive);
//! assert!(pattern.matches("fairyCake123"));
//! assert!(!pattern.matches("some Fairycake"));
//! ```
//!
//! # Quoting
//!
//! Arbitrary text can be turned into a pattern that matches only that text:
//!
//! ```
//! use wildcard::{Pattern, quote};
//!
//! assert_eq!(quote("[*]"), r"\[\*]");
//! assert!(Pattern::new(quote("what? [really]*")).matches("what? [really]*"));
//! ```

mod compiler;
mod pattern;
mod program;
mod quote;

pub use pattern::*;
pub use quote::quote;
