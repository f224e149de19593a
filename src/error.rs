use thiserror::Error;

/// Failure reading from a [`LineSource`](crate::source::LineSource).
///
/// The engine hands these to the active step's `next_on_error` wrapped in an
/// [`anyhow::Error`], so steps can route on the kind with
/// `err.downcast_ref::<InputError>()`.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("end of input")]
    Eof,
    /// Input ended after some text but before a line terminator.
    #[error("end of input in the middle of a line")]
    Unterminated(String),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    pub fn is_eof(&self) -> bool {
        matches!(self, InputError::Eof | InputError::Unterminated(_))
    }

    /// Text read before input ended, empty for every other failure.
    pub fn partial(&self) -> &str {
        match self {
            InputError::Unterminated(text) => text,
            _ => "",
        }
    }
}

/// Errors that abort [`Prompts::run`](crate::engine::Prompts::run).
///
/// Read and validation failures never show up here: they are routed through
/// the step's own transitions.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no current step, call set_first before run")]
    NoCurrentStep,
    #[error("step `{0}` is not registered")]
    UnknownStep(String),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
