//! The scenario runner.
//!
//! [`Prompts`] owns a registry of steps keyed by id, the input and output
//! handles, and the current step. [`Prompts::run`] shows the current step's
//! prompt, collects its input, lets the step choose the next id, records
//! what happened, and repeats until a step routes to nowhere.

mod turn;

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Read, StdinLock, Stdout, Write};

use tracing::{debug, warn};

use crate::error::EngineError;
use crate::prompter::{LinePrompter, MultilinePrompter, Registered};
use crate::scenario::Step;
use crate::source::LineSource;

/// Registered steps plus the input, output and history of the current run.
pub struct Prompts<'a, R, W> {
    prompts: HashMap<String, Registered<'a>>,
    current: Option<String>,
    source: LineSource<R>,
    writer: W,
    scenario: Vec<Step>,
}

impl Prompts<'_, StdinLock<'static>, Stdout> {
    /// Prompt on stdout, read from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<T: Read, W: Write> Prompts<'_, BufReader<T>, W> {
    /// Wrap an unbuffered reader, e.g. a byte slice or a pipe, for testing.
    pub fn from_reader_and_writer(reader: T, writer: W) -> Self {
        Self::new(BufReader::new(reader), writer)
    }
}

impl<'a, R: BufRead, W: Write> Prompts<'a, R, W> {
    /// An engine with no steps, reading from `reader` and rendering to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            prompts: HashMap::new(),
            current: None,
            source: LineSource::new(reader),
            writer,
            scenario: Vec::new(),
        }
    }

    /// Register a step answered with one line. Replaces any step with the same id.
    pub fn add_line_prompter(&mut self, id: impl Into<String>, prompt: impl LinePrompter + 'a) {
        self.register(id.into(), Registered::Line(Box::new(prompt)));
    }

    /// Register a step answered with a block of lines. Replaces any step with the same id.
    pub fn add_multiline_prompter(
        &mut self,
        id: impl Into<String>,
        prompt: impl MultilinePrompter + 'a,
    ) {
        self.register(id.into(), Registered::Multiline(Box::new(prompt)));
    }

    fn register(&mut self, id: String, prompt: Registered<'a>) {
        if let Some(old) = self.prompts.insert(id.clone(), prompt) {
            debug!(step = %id, replaced = old.id(), "step re-registered");
        }
    }

    /// Set the step the next [`run`](Self::run) starts from.
    ///
    /// The id is not checked here: `run` fails if it is still unregistered.
    pub fn set_first(&mut self, id: impl Into<String>) {
        self.current = Some(id.into());
    }

    /// Id of the current step, `None` once a run has stopped.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Steps executed by the last run, in order.
    pub fn scenario(&self) -> &[Step] {
        &self.scenario
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run the scenario from the current step until a step routes to nowhere.
    ///
    /// Read and validation failures are rendered and handed to the step's
    /// `next_on_error`; they never end the run by themselves. A transition to
    /// an id that is not registered stops the run as if the step had returned
    /// `None`.
    ///
    /// Input left unread when the run stops stays buffered for the next run.
    pub fn run(&mut self) -> Result<(), EngineError> {
        self.scenario.clear();

        let mut id = self.current.clone().ok_or(EngineError::NoCurrentStep)?;

        loop {
            let (step, next) = self.execute(&id)?;
            self.scenario.push(step);
            self.current = self.resolve(next);

            match &self.current {
                Some(next) => id = next.clone(),
                None => {
                    debug!(steps = self.scenario.len(), last = %id, "scenario finished");
                    return Ok(());
                }
            }
        }
    }

    fn execute(&mut self, id: &str) -> Result<(Step, Option<String>), EngineError> {
        let prompt = self
            .prompts
            .get_mut(id)
            .ok_or_else(|| EngineError::UnknownStep(id.to_string()))?;

        let text = prompt.prompt_string();
        prompt.render_prompt(&mut self.writer, &text)?;
        self.writer.flush()?;

        let turn = match &mut *prompt {
            Registered::Line(p) => turn::single(p.as_mut(), &mut self.source),
            Registered::Multiline(p) => turn::multi(p.as_mut(), &mut self.source),
        };

        if let Some(err) = &turn.error {
            prompt.render_error(&mut self.writer, err)?;
            self.writer.flush()?;
        }

        debug!(
            step = %id,
            inputs = turn.inputs.len(),
            ok = turn.error.is_none(),
            next = ?turn.next,
            "step executed"
        );

        let step = Step::new(id.to_string(), text, turn.inputs, turn.error);
        Ok((step, turn.next))
    }

    fn resolve(&self, next: Option<String>) -> Option<String> {
        let id = next.filter(|id| !id.is_empty())?;
        if self.prompts.contains_key(&id) {
            Some(id)
        } else {
            warn!(step = %id, "transition to unregistered step, stopping");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompter::Prompter;
    use anyhow::{Result, bail};

    /// Accepts one fixed word and routes to fixed targets.
    struct Expect {
        word: &'static str,
        success: Option<&'static str>,
        error: Option<&'static str>,
    }

    impl Prompter for Expect {
        fn id(&self) -> &str {
            self.word
        }
        fn prompt_string(&self) -> String {
            format!("Type {}", self.word)
        }
    }

    impl LinePrompter for Expect {
        fn parse(&mut self, value: &str) -> Result<()> {
            if value == self.word {
                Ok(())
            } else {
                bail!("expected {}", self.word)
            }
        }
        fn next_on_success(&self, _value: &str) -> Option<String> {
            self.success.map(str::to_string)
        }
        fn next_on_error(&self, _err: &anyhow::Error) -> Option<String> {
            self.error.map(str::to_string)
        }
    }

    fn engine(input: &str) -> Prompts<'static, &[u8], Vec<u8>> {
        Prompts::new(input.as_bytes(), Vec::new())
    }

    fn output(p: &Prompts<'_, &[u8], Vec<u8>>) -> String {
        String::from_utf8(p.writer().clone()).unwrap()
    }

    #[test]
    fn run_without_first_step_fails() {
        let mut p = engine("");
        assert!(matches!(p.run(), Err(EngineError::NoCurrentStep)));
        assert!(p.scenario().is_empty());
    }

    #[test]
    fn run_with_unregistered_first_step_fails() {
        let mut p = engine("a\n");
        p.set_first("nope");
        assert!(matches!(p.run(), Err(EngineError::UnknownStep(id)) if id == "nope"));
        assert!(output(&p).is_empty());
    }

    #[test]
    fn set_first_is_checked_lazily() {
        let mut p = engine("a\n");
        p.set_first("a");
        p.add_line_prompter(
            "a",
            Expect {
                word: "a",
                success: None,
                error: None,
            },
        );
        p.run().unwrap();
        assert_eq!(p.scenario().len(), 1);
    }

    #[test]
    fn empty_id_stops() {
        let mut p = engine("a\n");
        p.add_line_prompter(
            "a",
            Expect {
                word: "a",
                success: Some(""),
                error: None,
            },
        );
        p.set_first("a");
        p.run().unwrap();
        assert_eq!(p.current(), None);
        assert_eq!(p.scenario().len(), 1);
    }

    #[test]
    fn unregistered_target_stops_silently() {
        let mut p = engine("a\nb\n");
        p.add_line_prompter(
            "a",
            Expect {
                word: "a",
                success: Some("ghost"),
                error: None,
            },
        );
        p.set_first("a");
        p.run().unwrap();
        assert_eq!(p.current(), None);
        assert_eq!(p.scenario().len(), 1);
        assert!(p.scenario()[0].is_success());
    }

    #[test]
    fn last_registration_wins() {
        let mut p = engine("b\n");
        p.add_line_prompter(
            "x",
            Expect {
                word: "a",
                success: None,
                error: None,
            },
        );
        p.add_line_prompter(
            "x",
            Expect {
                word: "b",
                success: None,
                error: None,
            },
        );
        p.set_first("x");
        p.run().unwrap();
        assert_eq!(output(&p), "Type b : \n");
        assert!(p.scenario()[0].is_success());
    }

    #[test]
    fn history_records_id_prompt_and_inputs() {
        let mut p = engine("nope\na\nb\n");
        p.add_line_prompter(
            "first",
            Expect {
                word: "a",
                success: Some("second"),
                error: Some("first"),
            },
        );
        p.add_line_prompter(
            "second",
            Expect {
                word: "b",
                success: None,
                error: None,
            },
        );
        p.set_first("first");
        p.run().unwrap();

        let ids: Vec<&str> = p.scenario().iter().map(Step::id).collect();
        assert_eq!(ids, ["first", "first", "second"]);
        assert_eq!(p.scenario()[0].inputs(), ["nope"]);
        assert_eq!(p.scenario()[0].error().unwrap().to_string(), "expected a");
        assert_eq!(p.scenario()[1].prompt(), "Type a");
        assert_eq!(p.scenario()[2].inputs(), ["b"]);
        assert_eq!(
            output(&p),
            "Type a : \nexpected a\nType a : \nType b : \n"
        );
    }
}
