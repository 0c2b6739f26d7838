use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use quicksearch::SearchClient;
use quicksearch::render::{render_json, render_listing};

#[derive(Parser, Debug)]
#[command(name = "quicksearch", version, about = "Quick DuckDuckGo instant answer search")]
struct Cli {
    /// Query words; prompts on stdin when omitted
    query: Vec<String>,

    /// Print results as a JSON array
    #[arg(long)]
    json: bool,

    /// Override the search API endpoint
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    #[arg(short, long)]
    verbose: bool,
}

fn prompt_query() -> Result<String> {
    print!("Enter your search query: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read query from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never interleave with the listing
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let query = if cli.query.is_empty() {
        prompt_query()?
    } else {
        cli.query.join(" ")
    };

    let mut client = SearchClient::new();
    if let Some(base_url) = cli.base_url {
        client = client.with_base_url(base_url);
    }
    if let Some(secs) = cli.timeout {
        client = client.with_timeout(Duration::from_secs(secs));
    }

    let results = client.search(&query).await?;

    if cli.json {
        println!("{}", render_json(&results)?);
    } else {
        print!("{}", render_listing(&query, &results));
    }
    Ok(())
}
