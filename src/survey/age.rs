use anyhow::{Context, Result};
use std::cell::RefCell;

use super::{AGE, Answers, BIO, route_error};
use crate::prompter::{LinePrompter, Prompter};

pub struct AgePrompt<'a> {
    answers: &'a RefCell<Answers>,
}

impl<'a> AgePrompt<'a> {
    pub fn new(answers: &'a RefCell<Answers>) -> Self {
        Self { answers }
    }
}

impl Prompter for AgePrompt<'_> {
    fn id(&self) -> &str {
        AGE
    }

    fn prompt_string(&self) -> String {
        "How old are you ?".to_string()
    }
}

impl LinePrompter for AgePrompt<'_> {
    fn parse(&mut self, value: &str) -> Result<()> {
        let age = value
            .trim()
            .parse::<u8>()
            .with_context(|| format!("invalid age `{value}`"))?;
        self.answers.borrow_mut().age = Some(age);
        Ok(())
    }

    fn next_on_success(&self, _value: &str) -> Option<String> {
        Some(BIO.to_string())
    }

    fn next_on_error(&self, err: &anyhow::Error) -> Option<String> {
        route_error(err, AGE)
    }
}
