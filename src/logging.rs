//! Logging and tracing infrastructure for trigon.
//!
//! Structured logging via the tracing crate. The filter comes from
//! `RUST_LOG` and defaults to `info`.

use std::sync::Once;
use tracing::{info, Subscriber};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

static INIT: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// One JSON object per event, event fields nested under `"fields"`.
fn json_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_current_span(true)
}

/// Initialize the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with shell prompts on stdout.
/// Only the first call (of this or [`init_tracing_json`]) has an effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        // try_init: a test harness or host program may already own the
        // global subscriber
        let _ = tracing_subscriber::registry()
            .with(env_filter())
            .with(fmt_layer)
            .try_init();

        info!("trigon tracing initialized");
    });
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(env_filter())
            .with(json_layer(std::io::stderr))
            .try_init();

        info!("trigon tracing initialized (JSON mode)");
    });
}

/// Pick the subscriber format from a flag.
pub fn init(json: bool) {
    if json {
        init_tracing_json();
    } else {
        init_tracing();
    }
}
