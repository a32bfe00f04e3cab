use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use phone_cleanse::config::{default_db_path, CleanseConfig};
use phone_cleanse::infra::export::csv::{cleaned_file_path, write_csv_grid};
use phone_cleanse::infra::sqlite::repo::SqliteCounterStore;
use phone_cleanse::usecase::services::history_service::HistoryService;
use phone_cleanse::{CleanseService, CounterStore, LogProgress};

#[derive(Parser, Debug)]
#[command(name = "phone-cleanse")]
#[command(about = "Remove in-sheet and over-cap repeated phone numbers from a sheet")]
struct Cli {
    /// History database (defaults to the per-user data directory)
    #[arg(long, global = true, env = "PHONE_CLEANSE_DB")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean the first sheet of a .csv/.xlsx/.xls/.ods file
    Clean {
        file: PathBuf,

        /// Output CSV (defaults to cleaned_<name>.csv next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keys per history round-trip
        #[arg(long, default_value_t = CleanseConfig::default().chunk_size)]
        chunk_size: usize,

        /// Accepted occurrences allowed per number across all runs
        #[arg(long, default_value_t = CleanseConfig::default().lifetime_cap)]
        cap: u32,
    },
    /// Show how many times a number has been accepted
    Lookup { value: String },
    /// Forget every recorded occurrence
    ClearHistory,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let db_path = match cli.db {
        Some(path) => path,
        None => default_db_path()?,
    };
    log::debug!("history db: {}", db_path.display());
    let store: Arc<dyn CounterStore> = Arc::new(SqliteCounterStore::new(db_path));

    match cli.command {
        Command::Clean {
            file,
            output,
            chunk_size,
            cap,
        } => {
            let config = CleanseConfig {
                chunk_size,
                lifetime_cap: cap,
            }
            .validate()?;
            let service = CleanseService::new(store, config);
            let outcome = service
                .cleanse_file(&file, &LogProgress)
                .map_err(|err| anyhow::anyhow!("[{}] {}", err.kind(), err.message()))?;

            let output = output.unwrap_or_else(|| cleaned_file_path(&file));
            write_csv_grid(&outcome.grid, &output)?;
            println!("{}", outcome.stats);
            println!("written to {}", output.display());
        }
        Command::Lookup { value } => {
            let history = HistoryService::new(store);
            match history.lookup(&value).context("failed to read history")? {
                Some((key, count)) => println!("{key}: {count}"),
                None => println!("{value:?} contains no digits"),
            }
        }
        Command::ClearHistory => {
            HistoryService::new(store)
                .clear_history()
                .context("failed to clear history")?;
            println!("history cleared");
        }
    }

    Ok(())
}
