//! Command-line harness for predicate-inlay.
//!
//! Compiles each expression given on the command line, prints its token
//! stream and folded tree, and evaluates it against fixed `NAME=BOOL`
//! assignments. Names without an assignment stay unresolved and evaluate
//! true.
//!
//! # Configuration
//!
//! - `PREDICATE_INLAY_LOG_LEVEL`: Log verbosity (trace, debug, info, warn,
//!   error), overridden by `--log-level`.

pub mod config;
pub mod error;
pub mod harness;
pub mod logging;
