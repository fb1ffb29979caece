//! A tiny license-verification command front end.
//!
//! The crate classifies a sequence of command-line style tokens into exactly one
//! action (show help, verify a state, verify a license, batch validation, set a
//! configuration value, or explain correct usage) and runs it, writing plain text.
//! Rules are tried in order and the first one that matches wins.
//!
//! The main entry points are [`Classifier`], which owns the ordered rule set, and
//! [`Session`], which wraps a classifier with console output, a demo script and an
//! interactive loop. The public modules [`command`] and [`config`] expose the traits
//! for writing your own rules and actions and the environment-driven settings.

mod actions;
mod classifier;
pub mod command;
pub mod config;
mod lexer;
mod route;
mod rules;
mod session;
pub mod trace;

pub use actions::*;
pub use classifier::{Classifier, Selection};
pub use lexer::{LexingError, split_into_tokens};
pub use route::Route;
pub use rules::*;

/// Just a convenient re-export of the console host.
///
/// See [`Session`] for the high-level API.
pub use session::Session;
