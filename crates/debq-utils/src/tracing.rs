use sentry::ClientInitGuard;
use sentry_tracing::EventFilter;
use std::borrow::Cow;
use thiserror::Error;
use tracing_core::{Level, LevelFilter};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug)]
pub struct TracingConfig {
    // Filled in by the binary so the sentry release names the binary, not this crate
    pub package: &'static str,
    pub version: &'static str,
    #[builder(default)]
    pub sentry_dsn: Option<String>,
    #[builder(setter(into), default = String::from("dev"))]
    pub env: String,
    #[builder(default = LevelFilter::INFO)]
    pub default_level: LevelFilter,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the sentry client alive. Events are flushed when this is dropped.
pub struct TracingGuard {
    _sentry: ClientInitGuard,
}

fn sentry_event_filter(metadata: &tracing_core::Metadata<'_>) -> EventFilter {
    match *metadata.level() {
        Level::ERROR => EventFilter::Event,
        Level::TRACE => EventFilter::Ignore,
        _ => EventFilter::Breadcrumb,
    }
}

pub fn setup(config: TracingConfig) -> Result<TracingGuard, Error> {
    let guard = sentry::init((
        config.sentry_dsn.clone(),
        sentry::ClientOptions {
            release: Some(Cow::Owned(format!("{}@{}", config.package, config.version))),
            environment: Some(Cow::Owned(config.env.clone())),
            ..Default::default()
        },
    ));

    let sentry_layer = sentry_tracing::layer().event_filter(sentry_event_filter);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(config.default_level.into())
                .from_env_lossy(),
        )
        .with(sentry_layer)
        .try_init()?;

    tracing::debug!(
        package = config.package,
        version = config.version,
        env = config.env,
        sentry = guard.is_enabled(),
        "tracing initialized"
    );
    Ok(TracingGuard { _sentry: guard })
}
