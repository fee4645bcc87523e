use lazy_static::lazy_static;
use std::{env, io};
use tracing::{warn, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

const DEFAULT_LEVEL: Level = Level::INFO;

lazy_static! {
    static ref LOG_LEVEL: Option<String> = env::var("EVENTGEN_LOG").ok();
}

pub fn setup_tracing() {
    let (level, invalid_level) = match LOG_LEVEL.as_ref() {
        None => (DEFAULT_LEVEL, None),
        Some(value) => match value.parse::<Level>() {
            Ok(level) => (level, None),
            Err(_) => (DEFAULT_LEVEL, Some(value)),
        },
    };

    let filter = filter::Targets::new()
        .with_target("eventgen", level)
        .with_default(Level::WARN);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stdout))
        .init();

    if let Some(value) = invalid_level {
        warn!("Unknown log level '{}'. Continuing with {}.", value, DEFAULT_LEVEL);
    }
}
