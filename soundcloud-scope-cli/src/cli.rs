use std::time::Duration;

use clap::{Parser, Subcommand};
use snafu::prelude::*;
use soundcloud_scope_core::{Config, Scope, SearchResult};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Search endpoint base url. (overrides the built-in endpoint)
    #[clap(long, env = "SOUNDCLOUD_BASE_URL")]
    base_url: Option<String>,

    /// Consumer key used for both search and stream authorization.
    #[clap(long, env = "SOUNDCLOUD_API_KEY")]
    api_key: Option<String>,

    /// Maximum number of results per search.
    #[clap(long)]
    limit: Option<u32>,

    /// Sort order requested from the API.
    #[clap(long)]
    order: Option<String>,

    /// Request timeout in seconds.
    #[clap(long)]
    timeout_secs: Option<u64>,

    #[clap(short, long)]
    /// Log level
    verbosity: Option<tracing::Level>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog and list the results.
    Search { query: String },
    /// Search the catalog and show the detail view for one result.
    Preview {
        query: String,
        /// Zero-based position in the result list.
        #[clap(default_value_t = 0)]
        index: usize,
    },
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{error}"))]
    ClientError { error: String },
    #[snafu(display("no result at position {index}"))]
    NoResult { index: usize },
}

impl From<soundcloud_scope_client::Error> for Error {
    fn from(error: soundcloud_scope_client::Error) -> Self {
        Error::ClientError {
            error: error.to_string(),
        }
    }
}

pub async fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_target(false)
        .compact()
        .init();

    let mut config = Config::default();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(api_key) = cli.api_key {
        config.api_key = api_key;
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    if let Some(order) = cli.order {
        config.order = order;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout = Duration::from_secs(timeout_secs);
    }

    let scope = Scope::new(config)?;

    match cli.command {
        Commands::Search { query } => {
            let results = scope.search(&query).await;

            if results.is_empty() {
                println!("No results.");
                return Ok(());
            }

            for (index, result) in results.iter().enumerate() {
                print_result(index, result);
            }

            Ok(())
        }
        Commands::Preview { query, index } => {
            let results = scope.search(&query).await;
            let result = results.get(index).context(NoResultSnafu { index })?;

            let preview = scope.preview(result);

            println!("{}", preview.title);
            if !preview.subtitle.is_empty() {
                println!("by {}", preview.subtitle);
            }
            if !preview.art.is_empty() {
                println!("art: {}", preview.art);
            }
            if let Some(track) = &preview.track {
                println!(
                    "track {}: {} ({})",
                    track.number,
                    track.source,
                    track.formatted_duration()
                );
            }
            if !preview.comment.is_empty() {
                println!("\n{}", preview.comment);
            }
            println!("\n[{}] {}", preview.action.label, preview.action.uri);

            Ok(())
        }
    }
}

fn print_result(index: usize, result: &SearchResult) {
    let artist = if result.metadata.artist.is_empty() {
        String::new()
    } else {
        format!(" — {}", result.metadata.artist)
    };

    println!("{index:>2}. {}{artist}", result.title);
    println!("    {}", result.uri);
}
