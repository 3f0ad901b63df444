//! Command Line Interface (CLI) layer for REVTRIAGE.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for one classification run. It
//! wires user-provided options to the underlying library functionality
//! exposed via `revtriage::api`.
//!
//! If you are embedding REVTRIAGE into another application, prefer using
//! the high-level `revtriage::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
