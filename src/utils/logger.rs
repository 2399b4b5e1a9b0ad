use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins when set. Otherwise request traces from `tower_http` are
/// included at the same level as the proxy's own events.
fn default_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "loyverse_proxy=debug,tower_http=debug,info"
    } else {
        "loyverse_proxy=info,tower_http=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber: compact text for terminals, JSON lines for
/// log collectors.
pub fn init_logger(verbose: bool, json: bool) {
    let compact = (!json).then(|| fmt::layer().with_target(false).compact());
    let json_lines = json.then(|| {
        fmt::layer()
            .with_target(false)
            .json()
            .with_current_span(true)
    });

    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(compact)
        .with(json_lines)
        .init();
}
