//! serp-tool command line runner
//!
//! Runs a batch of queries through the search tool and prints the report.

use anyhow::Result;
use clap::Parser;
use serp_tool::tool::input_schema;
use serp_tool::{config, Location, SearchQueryExecutor, SearchRequest, SearchTool};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

#[derive(Parser, Debug)]
#[command(name = "serp-tool", version, about = "Run web searches and print a text report")]
struct Cli {
    /// Queries to search for
    #[arg(required_unless_present = "schema")]
    queries: Vec<String>,

    /// Market code (us, gb, nl, ca); defaults to the configured location
    #[arg(short, long)]
    location: Option<Location>,

    /// Path to settings.yml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the tool input schema and exit
    #[arg(long)]
    schema: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Settings may raise the level to `debug` after they are loaded.
    let (filter, filter_handle) = reload::Layer::new(env_filter("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    info!("Starting serp-tool v{}", serp_tool::VERSION);

    let settings = match cli.config {
        Some(ref path) => config::load_from(path)?,
        None => config::load()?,
    };

    let rust_log_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    if raise_to_debug(&filter_handle, settings.general.debug, rust_log_set)? {
        debug!("Debug logging enabled by settings");
    }

    if cli.schema {
        println!("{}", serde_json::to_string_pretty(&input_schema())?);
        return Ok(());
    }

    let tool = SearchQueryExecutor::from_settings(&settings)?;

    let mut request = SearchRequest::new(cli.queries);
    request.location = cli.location;

    let report = tool.execute(request).await?;
    println!("Search Results:");
    println!("{}", report);

    Ok(())
}

/// `RUST_LOG` when set, otherwise `default_level`
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Switch the log filter to `debug` when settings ask for it and `RUST_LOG`
/// was not given. Returns whether the filter changed.
fn raise_to_debug(
    handle: &reload::Handle<EnvFilter, Registry>,
    debug: bool,
    rust_log_set: bool,
) -> Result<bool> {
    if !debug || rust_log_set {
        return Ok(false);
    }
    handle.reload(EnvFilter::new("debug"))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_raise_to_debug() {
        let (filter, handle) = reload::Layer::new(EnvFilter::new("info"));
        let subscriber = tracing_subscriber::registry().with(filter);

        tracing::subscriber::with_default(subscriber, || {
            assert!(!raise_to_debug(&handle, false, false).unwrap());
            assert!(!raise_to_debug(&handle, true, true).unwrap());
            assert!(!tracing::enabled!(Level::DEBUG));

            assert!(raise_to_debug(&handle, true, false).unwrap());
            assert!(tracing::enabled!(Level::DEBUG));
        });
    }
}
