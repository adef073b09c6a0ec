use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use html_escape::decode_html_entities;
use std::process;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use subreddit_directory::models::AppConfig;
use subreddit_directory::transport::HttpTransport;
use subreddit_directory::{Category, DirectoryFetcher, ListingSelector, Session, Subreddit};

#[derive(Debug, Parser)]
#[command(name = "subreddit-directory", about = "Browse Reddit's subreddit directory")]
struct Cli {
    /// Print a plain text table instead of JSON
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the default directory, or a category such as popular, new or banned
    List {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one subreddit (no session needed)
    About { name: String },
    /// Search the default directory for a name, ignoring case
    Find { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = AppConfig::from_env()?;

    let transport = HttpTransport::from_config(&cfg).context("failed to build HTTP client")?;
    let fetcher = DirectoryFetcher::new(transport, cfg.base_url.clone());

    match cli.command {
        Command::List { category } => {
            let session = require_session(&cfg)?;
            let selector = match category {
                Some(raw) => ListingSelector::Category(raw.parse::<Category>()?),
                None => ListingSelector::Default,
            };
            let listing = fetcher
                .fetch(session, &selector)
                .await
                .context("failed to fetch subreddit listing")?;
            info!("Fetched {} subreddit(s)", listing.len());
            if cli.plain {
                for sub in &listing {
                    println!("{}", plain_line(sub));
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            }
        }
        Command::About { name } => {
            let sub = fetcher
                .fetch_one(&name, cfg.session.as_ref())
                .await
                .with_context(|| format!("failed to fetch r/{}", name))?;
            print_one(&sub, cli.plain)?;
        }
        Command::Find { name } => {
            let session = require_session(&cfg)?;
            let found = fetcher
                .find_in_directory(session, &name)
                .await
                .context("failed to fetch subreddit listing")?;
            match found {
                Some(sub) => print_one(&sub, cli.plain)?,
                None => {
                    eprintln!("r/{} is not in the default directory", name);
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn require_session(cfg: &AppConfig) -> Result<&Session> {
    cfg.session
        .as_ref()
        .ok_or_else(|| anyhow!("REDDIT_SESSION is required for directory listings"))
}

fn print_one(sub: &Subreddit, plain: bool) -> Result<()> {
    if plain {
        println!("{}", plain_line(sub));
    } else {
        println!("{}", serde_json::to_string_pretty(sub)?);
    }
    Ok(())
}

fn plain_line(sub: &Subreddit) -> String {
    let created = sub
        .created_utc_at()
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| sub.created_utc().to_string());
    format!(
        "{:<24} {:>10} {}{}  (since {})",
        sub.display_name(),
        sub.subscriber_count(),
        if sub.nsfw() { "[nsfw] " } else { "" },
        decode_html_entities(sub.title()),
        created
    )
}
