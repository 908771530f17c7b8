//! Line filter printing lines of text that match a wildcard pattern as a whole.
//!
//! Pattern compilation and matching live in the [`wildcard`] crate,
//! this crate adds input handling, configuration and reporting on top of it.

// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod settings;

// public uses
pub use app::{App, Options};
pub use wildcard::{Case, Pattern, quote};
