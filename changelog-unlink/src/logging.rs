use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Map the `-v` count to a diagnostics level. `None` means diagnostics stay off.
pub fn level_for(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::INFO),
        2 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    }
}

/// Install the stderr diagnostics subscriber.
///
/// Stdout is reserved for status lines, so diagnostics always go to stderr.
/// The level comes from the command line only; `RUST_LOG` is not consulted.
pub fn init(verbose: u8) {
    let Some(level) = level_for(verbose) else {
        return;
    };

    tracing_subscriber::registry()
        .with(level)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
