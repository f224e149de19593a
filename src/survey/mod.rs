//! A small built-in survey used by the `promptline` binary.
//!
//! Steps are registered under the ids below and write what they accept into
//! a shared [`Answers`]. Any read failure (end of input, broken pipe) ends
//! the survey; validation failures ask again.

mod age;
mod bio;
mod confirm;
mod name;

use std::cell::RefCell;
use std::io::{BufRead, Write};

use serde::Serialize;
use serde_json::{Value, json};

use crate::engine::Prompts;
use crate::error::InputError;
use crate::scenario::Step;

pub use age::AgePrompt;
pub use bio::BioPrompt;
pub use confirm::ConfirmPrompt;
pub use name::NamePrompt;

pub const NAME: &str = "name";
pub const AGE: &str = "age";
pub const BIO: &str = "bio";
pub const CONFIRM: &str = "confirm";

/// Step the survey starts from.
pub const FIRST: &str = NAME;

/// Everything the survey collected.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Answers {
    pub name: String,
    pub age: Option<u8>,
    pub bio: Vec<String>,
    pub confirmed: bool,
}

/// Register every survey step on `prompts`. With `plain`, the confirmation
/// step keeps the default rendering.
pub fn register<'a, R: BufRead, W: Write>(
    prompts: &mut Prompts<'a, R, W>,
    answers: &'a RefCell<Answers>,
    plain: bool,
) {
    prompts.add_line_prompter(NAME, NamePrompt::new(answers));
    prompts.add_line_prompter(AGE, AgePrompt::new(answers));
    prompts.add_multiline_prompter(BIO, BioPrompt::new(answers));
    prompts.add_line_prompter(CONFIRM, ConfirmPrompt::new(answers, plain));
}

/// Collected answers next to the steps that produced them, for `--json`.
pub fn report(answers: &Answers, scenario: &[Step]) -> Value {
    json!({
        "answers": answers,
        "scenario": scenario,
    })
}

/// Read failures stop the survey, anything else goes back to `retry`.
fn route_error(err: &anyhow::Error, retry: &str) -> Option<String> {
    if err.is::<InputError>() {
        None
    } else {
        Some(retry.to_string())
    }
}
