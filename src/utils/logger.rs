use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(verbose: bool) -> EnvFilter {
    let default_directive = if verbose {
        "s3_file_fetcher=debug,info"
    } else {
        "s3_file_fetcher=info,warn"
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(), // JSON lines for log collectors such as CloudWatch
        )
        .init();
}

pub fn init_logger(verbose: bool, json: bool) {
    if json {
        init_json_logger(verbose);
    } else {
        init_cli_logger(verbose);
    }
}
