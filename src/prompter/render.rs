//! Fallback rendering used by steps that don't override the hooks.

use std::io::{self, Write};

use crate::consts::{ERROR_SUFFIX, PROMPT_SUFFIX};

/// Write `"<prompt> : \n"`.
pub fn default_prompt(w: &mut dyn Write, prompt: &str) -> io::Result<()> {
    write!(w, "{prompt}{PROMPT_SUFFIX}")
}

/// Write `"<message>\n"`.
pub fn default_error(w: &mut dyn Write, err: &anyhow::Error) -> io::Result<()> {
    write!(w, "{err}{ERROR_SUFFIX}")
}
