use crate::cli::opt::Run;
use crate::cli::run::presenter::ConsolePresenter;
use crate::cli::run::prompt::ProgressPrompt;
use anyhow::{Error, Result};
use debq_config::questionnaire::load;
use debq_config::questionnaire::question::QUESTION_COUNT;
use debq_core::flow::{Outcome, QuestionnaireFlow};
use debq_core::participant::ParticipantId;
use debq_core::registry::{SessionRegistry, lock};
use debq_core::session::SessionStatus;
use debq_utils::loader::loader_for;
use reedline::{Reedline, Signal};
use regex::Regex;
use std::sync::Arc;

pub(crate) mod presenter;
pub(crate) mod prompt;

/// The console has exactly one participant.
const PARTICIPANT: ParticipantId = ParticipantId(0);

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Start,
    Test,
    Exit,
    Select(i64),
    Unknown(String),
}

fn parse_line(command_regex: &Regex, line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if let Some(captures) = command_regex.captures(line) {
        let name = captures.get(1).map_or("", |m| m.as_str());
        return Some(match name {
            "start" => Command::Start,
            "test" => Command::Test,
            "exit" => Command::Exit,
            _ => Command::Unknown(line.to_owned()),
        });
    }
    Some(
        line.parse()
            .map_or_else(|_| Command::Unknown(line.to_owned()), Command::Select),
    )
}

fn progress(registry: &SessionRegistry) -> Option<String> {
    let session = registry.get(PARTICIPANT)?;
    let status = lock(&session).status();
    Some(match status {
        SessionStatus::AwaitingAnswer(id) => format!("{id}/{QUESTION_COUNT}"),
        SessionStatus::Completed => "done".to_owned(),
    })
}

pub(crate) async fn run(opt: Run) -> Result<(), Error> {
    let _guard = opt
        .debug
        .then(|| {
            debq_utils::tracing::setup(
                debq_utils::tracing::TracingConfig::builder()
                    .package(env!("CARGO_PKG_NAME"))
                    .version(env!("CARGO_PKG_VERSION"))
                    .default_level(tracing::level_filters::LevelFilter::DEBUG)
                    .build(),
            )
        })
        .transpose()?;

    let (loader, file) = loader_for(&opt.questions)?;
    let questionnaire = load(&loader, &file).await?;
    println!(
        "Loaded '{}' with {} questions.\nCommands: /start, /test, /exit. Answer with a number from 1 to 5.",
        questionnaire.title,
        questionnaire.questions.len()
    );

    let registry = Arc::new(SessionRegistry::new(Arc::new(questionnaire.questions)));
    let flow = QuestionnaireFlow::new(Arc::clone(&registry));
    let presenter = ConsolePresenter::new(std::io::stdout());

    let mut line_editor = Reedline::create();
    let mut prompt = ProgressPrompt::default();
    let command_regex = Regex::new(r"^/(\w+)(?:\s+(.*))?$")?;

    loop {
        prompt.set_progress(progress(&registry));
        let sig = line_editor.read_line(&prompt)?;
        let user_input = match sig {
            Signal::Success(user_input) => user_input,
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nAborted!");
                break;
            }
        };
        if opt.debug {
            println!("Got input {user_input}");
        }

        let outcome = match parse_line(&command_regex, &user_input) {
            None => continue,
            Some(Command::Exit) => {
                println!("Exiting...");
                break;
            }
            Some(Command::Unknown(input)) => {
                eprintln!("Unknown input {input}");
                continue;
            }
            Some(Command::Start) => flow.on_start(PARTICIPANT, &presenter).await?,
            Some(Command::Test) => flow.on_test(PARTICIPANT, &presenter).await?,
            Some(Command::Select(value)) => flow.on_selection(PARTICIPANT, value, &presenter).await?,
        };
        match outcome {
            Outcome::Ignored(error) => eprintln!("Ignored: {error}"),
            Outcome::Aborted => eprintln!("The session was discarded, start again with /test"),
            Outcome::Notified | Outcome::Presented(_) | Outcome::Completed(_) => {}
        }
    }

    Ok(())
}
