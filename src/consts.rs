//! Project-wide constants.

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Appended after the prompt text by the default prompt renderer.
pub const PROMPT_SUFFIX: &str = " : \n";

/// Appended after the error message by the default error renderer.
pub const ERROR_SUFFIX: &str = "\n";
