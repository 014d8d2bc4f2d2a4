use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "debq-bot", about = "Run the DEBQ questionnaire as a Telegram bot")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(
        long,
        default_value = "config/debq.questionnaire.yaml",
        help = "Path or file url of the question file (.json or .yaml)"
    )]
    pub(crate) questions: String,

    #[arg(long, env = "BOT_TOKEN", hide_env_values = true, help = "Telegram bot token")]
    pub(crate) bot_token: Option<String>,

    #[arg(
        long,
        default_value_t = 86_400,
        help = "Seconds without activity after which a session is dropped"
    )]
    pub(crate) session_idle_timeout: u64,

    #[arg(long, default_value_t = 600, help = "Seconds between two sweeps for idle sessions")]
    pub(crate) eviction_interval: u64,

    #[arg(long = "sentry-dsn", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(long, default_value = "dev", help = "Set the environment used by sentry")]
    pub(crate) env: String,
}
