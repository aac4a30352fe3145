use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser, Subcommand};

use streamwave::api::ApiClient;
use streamwave::commands;
use streamwave::config::{ApiConfig, load_env};
use streamwave::detail::DEFAULT_CATEGORY;
use streamwave::error::Result;
use streamwave::logging::{init_logging, level_from_verbosity};

#[derive(Parser)]
#[command(name = "streamwave")]
#[command(about = "Browse, search and inspect videos from the terminal")]
#[command(version)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the latest videos for a category
    Feed {
        /// Category to browse (e.g., "Music", "Coding")
        #[arg(default_value = DEFAULT_CATEGORY)]
        category: String,
    },

    /// Search for videos and channels
    Search {
        /// Search term
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        term: String,
    },

    /// Show a video with its channel and related videos
    Video {
        /// Video ID (e.g., "dQw4w9WgXcQ")
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        id: String,
    },

    /// Show a channel and its latest uploads
    Channel {
        /// Channel ID (e.g., "UC_x5XG1OV2P6uZZ5FSM9Ttw")
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        id: String,
    },
}

async fn run(command: Commands) -> Result<()> {
    let api = ApiClient::new(ApiConfig::from_env()?)?;

    match command {
        Commands::Feed { category } => commands::feed::run(&api, &category).await,
        Commands::Search { term } => commands::search::run(&api, &term).await,
        Commands::Video { id } => commands::video::run(&api, &id).await,
        Commands::Channel { id } => commands::channel::run(&api, &id).await,
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables
    load_env();

    let cli = Cli::parse();

    if let Err(e) = init_logging(level_from_verbosity(cli.verbose)) {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
