use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. `RUST_LOG` wins over `configured`; `-v`
/// raises the saju crates to debug.
pub fn init_cli_logger(verbose: bool, configured: &str) {
    let fallback = if verbose {
        format!("saju_base=debug,saju_chart=debug,saju_config=debug,saju=debug,{configured}")
    } else {
        configured.to_string()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
