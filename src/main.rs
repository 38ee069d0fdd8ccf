use clap::Parser;
use midas_open_parser::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    setup_logging(&args);

    if let Err(error) = commands::run(args) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

/// Set up tracing output on stderr, honoring RUST_LOG when present
fn setup_logging(args: &Args) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("midas_open_parser={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
