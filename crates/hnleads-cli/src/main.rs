mod output;
mod scan;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hnleads_core::SearchScope;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hnleads")]
#[command(about = "Find founder leads in Hacker News discussions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search HN, classify authors and write the ranked lead list
    Scan(ScanArgs),
    /// Print summary statistics for a previously written lead file
    Stats {
        /// Path to a JSON lead file
        file: PathBuf,
    },
}

#[derive(Debug, Default, Args)]
pub(crate) struct ScanArgs {
    /// Search phrase; repeat for several. Overrides the queries file.
    #[arg(long = "query", value_name = "Q")]
    pub queries: Vec<String>,

    /// YAML file with a `queries:` list
    #[arg(long, value_name = "PATH")]
    pub queries_file: Option<PathBuf>,

    /// Which item kinds to search: comments, stories or both
    #[arg(long)]
    pub scope: Option<SearchScope>,

    /// Maximum results per query and kind
    #[arg(long, value_name = "N")]
    pub max_results: Option<u32>,

    /// Only consider items from the last D days
    #[arg(long, value_name = "D")]
    pub days_back: Option<u32>,

    /// Output file, or `-` for stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Items processed concurrently per search
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Print the resolved plan and exit without network access
    #[arg(long)]
    pub dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = hnleads_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan(args) => scan::run(&config, &args).await,
        Commands::Stats { file } => {
            let leads = output::read_leads(&file)?;
            println!("{}", hnleads_detect::LeadStats::from_leads(&leads));
            Ok(())
        }
    }
}
