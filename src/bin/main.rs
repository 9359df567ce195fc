use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use cinelist::config::Config;

#[derive(Parser, Debug)]
#[command(name = "cinelist-server")]
#[command(about = "Movie browsing web front end", long_about = None)]
struct Args {
    /// YAML config file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<String>,

    /// Base URL of the movie API, e.g. http://localhost:5000/api.
    /// Overrides MOVIES_API_URL and the config file.
    #[arg(long)]
    api_url: Option<String>,

    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug {
        "cinelist=debug,tower_http=debug"
    } else {
        "cinelist=info,tower_http=info"
    };
    let fmt_layer = if std::env::var_os("CINELIST_LOG_JSON").is_some() {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(fmt_layer)
        .init();

    let config = match args.config.as_deref() {
        Some(path) => {
            tracing::info!("Using config file: {}", path);
            match Config::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => Config::default(),
    };

    let mut config = config
        .with_api_url(std::env::var("MOVIES_API_URL").ok())
        .with_api_url(args.api_url);
    config.debug_logs = args.debug;

    if let Err(e) = cinelist::run(config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
