use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cogsamples::Config;

mod cli;

#[derive(Parser)]
#[command(name = "cogsamples")]
#[command(about = "Interactive runner for cognitive-services quickstart samples", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick and run samples interactively (the default)
    Run {
        /// Exit with an error on the first failed sample instead of continuing
        #[arg(long)]
        fail_fast: bool,
    },
    /// List sample groups and their examples
    List,
    /// Run one sample without prompting
    Invoke {
        /// Group index or exact name
        group: String,
        /// Example index within the group
        example: String,
        /// Subscription key (defaults to COGSAMPLES_SUBSCRIPTION_KEY)
        #[arg(short, long)]
        key: Option<String>,
        /// Custom configuration id, required by CustomImageSearch
        #[arg(long)]
        value: Option<String>,
    },
    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load().with_context(|| "Failed to load configuration")?;
    let config = cogsamples::config::install(config);

    match cli.command.unwrap_or(Commands::Run { fail_fast: false }) {
        Commands::Run { fail_fast } => cli::cmd_run(config, fail_fast),
        Commands::List => cli::cmd_list(),
        Commands::Invoke {
            group,
            example,
            key,
            value,
        } => cli::cmd_invoke(config, &group, &example, key, value),
        Commands::Version => {
            println!("cogsamples {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
