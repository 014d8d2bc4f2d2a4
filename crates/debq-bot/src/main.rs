use crate::opt::{Commands, Run};
use anyhow::Result;
use clap::Parser;
use debq_config::questionnaire::error::ConfigurationError;
use debq_config::questionnaire::{Questionnaire, load};
use debq_core::flow::QuestionnaireFlow;
use debq_core::registry::SessionRegistry;
use debq_utils::loader::loader_for;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use tokio::time::MissedTickBehavior;

mod handler;
mod opt;
mod presenter;

async fn run(opt: Run) -> Result<()> {
    let _guard = debq_utils::tracing::setup(
        debq_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(opt.sentry_dsn.clone())
            .env(opt.env.clone())
            .build(),
    )?;

    let token = opt
        .bot_token
        .filter(|token| !token.trim().is_empty())
        .ok_or(ConfigurationError::MissingCredential("BOT_TOKEN"))
        .inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, "no bot token"))?;

    let questionnaire = load_questionnaire(&opt.questions).await?;
    tracing::info!(
        questionnaire_id = questionnaire.questionnaire_id,
        title = questionnaire.title,
        "loaded questionnaire"
    );

    let registry = Arc::new(SessionRegistry::new(Arc::new(questionnaire.questions)));
    let eviction = tokio::spawn(evict_idle_sessions(
        Arc::clone(&registry),
        Duration::from_secs(opt.eviction_interval.max(1)),
        Duration::from_secs(opt.session_idle_timeout),
    ));

    let bot = Bot::new(token);
    let flow = QuestionnaireFlow::new(registry);
    tracing::info!("starting bot");
    Dispatcher::builder(bot, handler::schema())
        .dependencies(dptree::deps![flow])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    eviction.abort();
    tracing::info!("bot stopped");
    Ok(())
}

async fn load_questionnaire(location: &str) -> Result<Questionnaire> {
    let (loader, file) = loader_for(location)
        .inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, location, "bad location"))?;
    let questionnaire = load(&loader, &file).await?;
    Ok(questionnaire)
}

async fn evict_idle_sessions(registry: Arc<SessionRegistry>, every: Duration, max_idle: Duration) {
    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        let evicted = registry.evict_idle(max_idle);
        tracing::debug!(evicted, sessions = registry.len(), "idle sweep");
    }
}

fn main() -> Result<()> {
    unsafe { env::set_var("RUST_BACKTRACE", "1") };

    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
