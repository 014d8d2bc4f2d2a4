use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "debq", about = "Cli for the DEBQ questionnaire")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Take the questionnaire in the terminal
    Run(Run),

    /// Check question files
    Validate(Validate),

    /// Write the JSON schema of the question file format
    Schema(Schema),
}

#[derive(Debug, Parser)]
pub(crate) struct Run {
    #[arg(short, long)]
    pub(crate) debug: bool,
    #[arg(short, long, default_value = "config/debq.questionnaire.yaml")]
    pub(crate) questions: String,
}

#[derive(Debug, Parser)]
pub(crate) struct Validate {
    #[arg(required = true)]
    pub(crate) paths: Vec<String>,
}

#[derive(Debug, Parser)]
pub(crate) struct Schema {
    #[arg(required = true)]
    pub(crate) output_folder: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_validate_requires_paths() {
        assert!(Cli::try_parse_from(["debq", "validate"]).is_err());
        let cli = Cli::try_parse_from(["debq", "validate", "a.json", "b.yaml"]).unwrap();
        let Commands::Validate(validate) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(validate.paths, ["a.json", "b.yaml"]);
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["debq", "run"]).unwrap();
        let Commands::Run(run) = cli.command else {
            panic!("expected run");
        };
        assert!(!run.debug);
        assert_eq!(run.questions, "config/debq.questionnaire.yaml");
    }
}
