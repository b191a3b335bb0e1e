use anyhow::Context;
use clap::{Parser, Subcommand};
use clicktrail::{loader, preview};
use clicktrail_common::ElementSnapshot;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Click tracking and banner dismissal for static sites", long_about = None)]
struct Args {
    /// Config file (YAML, or JSON by extension). Defaults to ./clicktrail.yaml, then ~/.clicktrail/config.yaml
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the config and print the JSON to pass to `new ClickTrail(...)`
    Config {
        #[arg(long)]
        pretty: bool,
    },
    /// Print the CSS selectors the browser will query
    Selectors,
    /// Show the click events a captured page would report
    Preview {
        /// JSON array of captured elements
        #[arg(short, long)]
        elements: PathBuf,
        /// Page path reported as the origin
        #[arg(short, long, default_value = "/")]
        page: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = loader::load(args.file.as_deref()).await?;

    match args.command {
        Command::Config { pretty } => {
            let json = if pretty {
                serde_json::to_string_pretty(&config)?
            } else {
                serde_json::to_string(&config)?
            };
            println!("{}", json);
        }
        Command::Selectors => {
            println!("tracked: {}", config.tracked_css());
            println!("banners: {}", config.banners.selector);
        }
        Command::Preview { elements, page } => {
            let content = tokio::fs::read_to_string(&elements)
                .await
                .with_context(|| format!("Failed to read {}", elements.display()))?;
            let snapshots: Vec<ElementSnapshot> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", elements.display()))?;

            let entries = preview::preview(&config, &snapshots, &page)?;
            for entry in &entries {
                println!("{}", serde_json::to_string(&entry.event)?);
            }
            info!(
                "{} of {} elements tracked",
                entries.len(),
                snapshots.len()
            );
        }
    }

    Ok(())
}
