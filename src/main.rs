use bmpfilter::bmpfilter;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let results = bmpfilter(std::env::args_os().skip(1));
    if results.is_err() {
        eprintln!("Usage: bmpfilter [files] [--export path]");
    }
    results
}
