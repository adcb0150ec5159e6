use anyhow::Result;
use clap::{Parser, Subcommand};

/// ccswing - Country City Swing studio backend
#[derive(Parser)]
#[command(name = "ccswing")]
#[command(about = "Events, signups and prayer requests for the studio", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ccswing::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    ccswing::observability::init_observability(&config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => ccswing::cli::serve(config, host, port).await,
        Commands::Migrate => ccswing::cli::migrate(config).await,
    }
}
