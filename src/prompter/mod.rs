//! The contract every step of a scenario implements.
//!
//! A step validates input in [`parse`](LinePrompter::parse) and then picks
//! the next step id in one of two transitions: `next_on_success` sees the
//! input, `next_on_error` sees the error. Returning `None` (or an empty id)
//! ends the run. Because the transitions see the content of the input and
//! the kind of error, the scenario graph can branch on either.

pub mod render;

use anyhow::Result;
use std::io::{self, Write};

/// Identity and rendering, shared by single-line and multi-line steps.
pub trait Prompter {
    fn id(&self) -> &str;

    /// Text shown to the user before reading input.
    fn prompt_string(&self) -> String;

    /// Override to customize how the prompt is displayed.
    fn render_prompt(&self, w: &mut dyn Write, prompt: &str) -> io::Result<()> {
        render::default_prompt(w, prompt)
    }

    /// Override to customize how a read or validation error is displayed.
    fn render_error(&self, w: &mut dyn Write, err: &anyhow::Error) -> io::Result<()> {
        render::default_error(w, err)
    }
}

/// A step answered with a single line.
pub trait LinePrompter: Prompter {
    fn parse(&mut self, value: &str) -> Result<()>;
    fn next_on_success(&self, value: &str) -> Option<String>;
    fn next_on_error(&self, err: &anyhow::Error) -> Option<String>;
}

/// A step answered with a block of lines ended by a blank line or end of input.
pub trait MultilinePrompter: Prompter {
    fn parse(&mut self, values: &[String]) -> Result<()>;
    fn next_on_success(&self, values: &[String]) -> Option<String>;
    fn next_on_error(&self, err: &anyhow::Error) -> Option<String>;
}

// Lets a caller register `&mut step` and read the step's state back after the run.
impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn prompt_string(&self) -> String {
        (**self).prompt_string()
    }

    fn render_prompt(&self, w: &mut dyn Write, prompt: &str) -> io::Result<()> {
        (**self).render_prompt(w, prompt)
    }

    fn render_error(&self, w: &mut dyn Write, err: &anyhow::Error) -> io::Result<()> {
        (**self).render_error(w, err)
    }
}

impl<P: LinePrompter + ?Sized> LinePrompter for &mut P {
    fn parse(&mut self, value: &str) -> Result<()> {
        (**self).parse(value)
    }

    fn next_on_success(&self, value: &str) -> Option<String> {
        (**self).next_on_success(value)
    }

    fn next_on_error(&self, err: &anyhow::Error) -> Option<String> {
        (**self).next_on_error(err)
    }
}

impl<P: MultilinePrompter + ?Sized> MultilinePrompter for &mut P {
    fn parse(&mut self, values: &[String]) -> Result<()> {
        (**self).parse(values)
    }

    fn next_on_success(&self, values: &[String]) -> Option<String> {
        (**self).next_on_success(values)
    }

    fn next_on_error(&self, err: &anyhow::Error) -> Option<String> {
        (**self).next_on_error(err)
    }
}

/// A registered step, tagged with its input mode at registration time.
pub enum Registered<'a> {
    Line(Box<dyn LinePrompter + 'a>),
    Multiline(Box<dyn MultilinePrompter + 'a>),
}

impl Registered<'_> {
    pub fn id(&self) -> &str {
        match self {
            Registered::Line(p) => p.id(),
            Registered::Multiline(p) => p.id(),
        }
    }

    pub fn prompt_string(&self) -> String {
        match self {
            Registered::Line(p) => p.prompt_string(),
            Registered::Multiline(p) => p.prompt_string(),
        }
    }

    pub fn render_prompt(&self, w: &mut dyn Write, prompt: &str) -> io::Result<()> {
        match self {
            Registered::Line(p) => p.render_prompt(w, prompt),
            Registered::Multiline(p) => p.render_prompt(w, prompt),
        }
    }

    pub fn render_error(&self, w: &mut dyn Write, err: &anyhow::Error) -> io::Result<()> {
        match self {
            Registered::Line(p) => p.render_error(w, err),
            Registered::Multiline(p) => p.render_error(w, err),
        }
    }
}
