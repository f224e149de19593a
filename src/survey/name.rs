use anyhow::{Result, bail};
use std::cell::RefCell;

use super::{AGE, Answers, NAME, route_error};
use crate::prompter::{LinePrompter, Prompter};

pub struct NamePrompt<'a> {
    answers: &'a RefCell<Answers>,
}

impl<'a> NamePrompt<'a> {
    pub fn new(answers: &'a RefCell<Answers>) -> Self {
        Self { answers }
    }
}

impl Prompter for NamePrompt<'_> {
    fn id(&self) -> &str {
        NAME
    }

    fn prompt_string(&self) -> String {
        "What is your name ?".to_string()
    }
}

impl LinePrompter for NamePrompt<'_> {
    fn parse(&mut self, value: &str) -> Result<()> {
        let name = value.trim();
        if name.is_empty() {
            bail!("name must not be empty");
        }
        self.answers.borrow_mut().name = name.to_string();
        Ok(())
    }

    fn next_on_success(&self, _value: &str) -> Option<String> {
        Some(AGE.to_string())
    }

    fn next_on_error(&self, err: &anyhow::Error) -> Option<String> {
        route_error(err, NAME)
    }
}
