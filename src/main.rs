use std::cell::RefCell;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use promptline::Prompts;
use promptline::consts::{AUTHOR, REPO};
use promptline::survey::{self, Answers};

#[derive(Parser)]
#[command(
    name = "promptline",
    version,
    about = "Walks through a short interactive survey on the terminal."
)]
struct Cli {
    /// Print the recorded scenario as JSON when the survey ends
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Use the default prompt and error format for every step
    #[arg(long, default_value_t = false)]
    plain: bool,

    /// Log filter, overridden by RUST_LOG (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// What the survey thread hands back.
struct Outcome {
    answers: Answers,
    report: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cli.log_level).context("invalid --log-level filter")?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(author = AUTHOR, repo = REPO, "starting survey");

    let (json, plain) = (cli.json, cli.plain);
    let task = tokio::task::spawn_blocking(move || run_survey(json, plain));

    // The engine blocks on stdin, so Ctrl+C is raced against the whole run
    let outcome = tokio::select! {
        result = task => result.context("survey thread panicked")??,
        _ = tokio::signal::ctrl_c() => {
            println!("\ninterrupted");
            // the blocking reader can't be cancelled, don't wait for it
            std::process::exit(130);
        }
    };

    print_summary(&outcome.answers);
    if let Some(report) = outcome.report {
        println!("{report}");
    }
    Ok(())
}

fn run_survey(json: bool, plain: bool) -> anyhow::Result<Outcome> {
    let answers = RefCell::new(Answers::default());

    let mut prompts = Prompts::stdio();
    survey::register(&mut prompts, &answers, plain);
    prompts.set_first(survey::FIRST);
    prompts.run().context("survey aborted")?;

    let report = if json {
        let report = survey::report(&answers.borrow(), prompts.scenario());
        Some(serde_json::to_string_pretty(&report)?)
    } else {
        None
    };
    drop(prompts);

    Ok(Outcome {
        answers: answers.into_inner(),
        report,
    })
}

fn print_summary(answers: &Answers) {
    if !answers.confirmed {
        println!("\nsurvey not completed.");
        return;
    }
    println!("\nthanks, {}!", answers.name);
    if let Some(age) = answers.age {
        println!("  age  {age}");
    }
    println!("  bio  {} line(s)", answers.bio.len());
}
