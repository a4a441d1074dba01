use std::io::IsTerminal;
use tracing::{Level, Subscriber};
use tracing_subscriber::filter::{FilterExt, Targets};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Plain `message` lines with no timestamp, level or target prefix.
///
/// Whatever `env_filter` says, error events from this crate always pass, so a
/// failed fetch is never silent.
pub fn layer<S, W>(env_filter: EnvFilter, writer: W, ansi: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let always_errors = Targets::new().with_target(env!("CARGO_CRATE_NAME"), Level::ERROR);

    fmt::layer()
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer)
        .with_filter(env_filter.or(always_errors))
}

/// Sends log output to stderr so stdout only ever carries the JSON result.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let ansi = std::io::stderr().is_terminal();

    let _ = tracing_subscriber::registry()
        .with(layer(filter, std::io::stderr, ansi))
        .try_init();
}
