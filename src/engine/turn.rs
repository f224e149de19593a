//! Reading, parsing and routing for one step.

use std::io::BufRead;

use crate::error::InputError;
use crate::prompter::{LinePrompter, MultilinePrompter};
use crate::source::LineSource;

/// Outcome of executing one step, before the next id is resolved.
pub(crate) struct Turn {
    pub inputs: Vec<String>,
    pub error: Option<anyhow::Error>,
    pub next: Option<String>,
}

impl Turn {
    fn read_failed(
        inputs: Vec<String>,
        err: InputError,
        route: impl FnOnce(&anyhow::Error) -> Option<String>,
    ) -> Self {
        let err = anyhow::Error::from(err);
        let next = route(&err);
        Self {
            inputs,
            error: Some(err),
            next,
        }
    }
}

pub(crate) fn single<P, R>(step: &mut P, source: &mut LineSource<R>) -> Turn
where
    P: LinePrompter + ?Sized,
    R: BufRead,
{
    let line = match source.read_line() {
        Ok(line) => line,
        Err(e) => {
            let partial = e.partial().to_string();
            return Turn::read_failed(vec![partial], e, |err| step.next_on_error(err));
        }
    };

    match step.parse(&line) {
        Ok(()) => {
            let next = step.next_on_success(&line);
            Turn {
                inputs: vec![line],
                error: None,
                next,
            }
        }
        Err(err) => {
            let next = step.next_on_error(&err);
            Turn {
                inputs: vec![line],
                error: Some(err),
                next,
            }
        }
    }
}

pub(crate) fn multi<P, R>(step: &mut P, source: &mut LineSource<R>) -> Turn
where
    P: MultilinePrompter + ?Sized,
    R: BufRead,
{
    let mut lines = Vec::new();

    loop {
        match source.read_line() {
            Ok(line) => lines.push(line),
            Err(e) => return Turn::read_failed(Vec::new(), e, |err| step.next_on_error(err)),
        }
        match source.is_block_end() {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => return Turn::read_failed(Vec::new(), e, |err| step.next_on_error(err)),
        }
    }

    match step.parse(&lines) {
        Ok(()) => {
            let next = step.next_on_success(&lines);
            Turn {
                inputs: lines,
                error: None,
                next,
            }
        }
        Err(err) => {
            let next = step.next_on_error(&err);
            Turn {
                inputs: lines,
                error: Some(err),
                next,
            }
        }
    }
}
