use anyhow::{Result, bail};
use std::cell::RefCell;

use super::{Answers, BIO, CONFIRM, route_error};
use crate::prompter::{MultilinePrompter, Prompter};

/// Free text over several lines, ended by a blank line.
pub struct BioPrompt<'a> {
    answers: &'a RefCell<Answers>,
}

impl<'a> BioPrompt<'a> {
    pub fn new(answers: &'a RefCell<Answers>) -> Self {
        Self { answers }
    }
}

impl Prompter for BioPrompt<'_> {
    fn id(&self) -> &str {
        BIO
    }

    fn prompt_string(&self) -> String {
        "Tell us about yourself (finish with an empty line)".to_string()
    }
}

impl MultilinePrompter for BioPrompt<'_> {
    fn parse(&mut self, values: &[String]) -> Result<()> {
        if values.iter().all(|line| line.trim().is_empty()) {
            bail!("tell us at least one thing");
        }
        self.answers.borrow_mut().bio = values.to_vec();
        Ok(())
    }

    fn next_on_success(&self, _values: &[String]) -> Option<String> {
        Some(CONFIRM.to_string())
    }

    fn next_on_error(&self, err: &anyhow::Error) -> Option<String> {
        route_error(err, BIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn keeps_all_lines() {
        let answers = RefCell::new(Answers::default());
        BioPrompt::new(&answers)
            .parse(&lines(&["I write", "", "programs"]))
            .unwrap();
        assert_eq!(answers.borrow().bio, ["I write", "", "programs"]);
    }

    #[test]
    fn rejects_whitespace_only() {
        let answers = RefCell::new(Answers::default());
        assert!(BioPrompt::new(&answers).parse(&lines(&["  ", ""])).is_err());
        assert!(BioPrompt::new(&answers).parse(&lines(&[])).is_err());
    }
}
