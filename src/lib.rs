//! Sequencing engine for interactive command-line question/answer flows.
//!
//! A scenario is a set of steps ([`prompter`]) registered by id on a
//! [`Prompts`] engine. Each step shows a prompt, reads one line or a block
//! of lines, validates it, and names the step that comes next.
//!
//! ```no_run
//! use promptline::Prompts;
//! # use promptline::prompter::{LinePrompter, Prompter};
//! # struct AreYouOk;
//! # impl Prompter for AreYouOk {
//! #     fn id(&self) -> &str { "ok" }
//! #     fn prompt_string(&self) -> String { "Are you Ok ?".to_string() }
//! # }
//! # impl LinePrompter for AreYouOk {
//! #     fn parse(&mut self, v: &str) -> anyhow::Result<()> {
//! #         if v == "yes" || v == "no" { Ok(()) } else { anyhow::bail!("You must answer yes or no") }
//! #     }
//! #     fn next_on_success(&self, _: &str) -> Option<String> { None }
//! #     fn next_on_error(&self, _: &anyhow::Error) -> Option<String> { Some("ok".to_string()) }
//! # }
//!
//! let mut prompts = Prompts::stdio();
//! prompts.add_line_prompter("ok", AreYouOk);
//! prompts.set_first("ok");
//! prompts.run()?;
//! for step in prompts.scenario() {
//!     println!("{} -> {:?}", step.prompt(), step.inputs());
//! }
//! # Ok::<(), promptline::EngineError>(())
//! ```

pub mod consts;
pub mod engine;
pub mod error;
pub mod prompter;
pub mod scenario;
pub mod source;
pub mod survey;

pub use engine::Prompts;
pub use error::{EngineError, InputError};
pub use prompter::{LinePrompter, MultilinePrompter, Prompter};
pub use scenario::Step;
