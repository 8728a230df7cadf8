use super::*;

/// Installs the stderr subscriber. Filtering follows `RUST_LOG`; nothing is
/// logged when it is unset.
pub(crate) fn init() -> tracing_appender::non_blocking::WorkerGuard {
    let (writer, guard) = non_blocking(io::stderr());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(writer)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    guard
}
