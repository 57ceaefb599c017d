use std::process::exit;

use tracing_subscriber::EnvFilter;

use rusty_mailer::cli::run_app;

fn main() {
    // Log level is overridden by RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run_app() {
        eprintln!("{e}");
        exit(1);
    }
}
