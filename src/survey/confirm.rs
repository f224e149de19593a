use anyhow::{Result, bail};
use std::cell::RefCell;
use std::io::{self, Write};

use super::{Answers, CONFIRM, NAME, route_error};
use crate::prompter::{LinePrompter, Prompter, render};

/// Shows what was collected and asks for a yes/no. `no` starts over.
pub struct ConfirmPrompt<'a> {
    answers: &'a RefCell<Answers>,
    plain: bool,
}

impl<'a> ConfirmPrompt<'a> {
    pub fn new(answers: &'a RefCell<Answers>, plain: bool) -> Self {
        Self { answers, plain }
    }
}

impl Prompter for ConfirmPrompt<'_> {
    fn id(&self) -> &str {
        CONFIRM
    }

    fn prompt_string(&self) -> String {
        let answers = self.answers.borrow();
        let age = answers
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "?".to_string());
        format!("Is this right, {} ({})? [yes/no]", answers.name, age)
    }

    fn render_prompt(&self, w: &mut dyn Write, prompt: &str) -> io::Result<()> {
        if self.plain {
            return render::default_prompt(w, prompt);
        }
        for line in &self.answers.borrow().bio {
            writeln!(w, "  | {line}")?;
        }
        writeln!(w, "==> {prompt}")
    }

    fn render_error(&self, w: &mut dyn Write, err: &anyhow::Error) -> io::Result<()> {
        if self.plain {
            return render::default_error(w, err);
        }
        writeln!(w, "An error occurred : {err}")
    }
}

impl LinePrompter for ConfirmPrompt<'_> {
    fn parse(&mut self, value: &str) -> Result<()> {
        match value.trim() {
            "yes" => self.answers.borrow_mut().confirmed = true,
            "no" => self.answers.borrow_mut().confirmed = false,
            _ => bail!("You must answer yes or no"),
        }
        Ok(())
    }

    fn next_on_success(&self, value: &str) -> Option<String> {
        match value.trim() {
            "no" => Some(NAME.to_string()),
            _ => None,
        }
    }

    fn next_on_error(&self, err: &anyhow::Error) -> Option<String> {
        route_error(err, CONFIRM)
    }
}
