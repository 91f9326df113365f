use clap::{Parser, Subcommand};
use pocketbook::api::SandboxClient;
use pocketbook::console;
use pocketbook::core::config::{self, CliOverrides, PocketbookConfig};
use pocketbook::core::state::ErrorReport;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pocketbook", about = "Personal finance goals and sandbox transactions")]
struct Args {
    /// Word limit for each goal (overrides config and POCKETBOOK_MAX_WORDS)
    #[arg(long, global = true, allow_negative_numbers = true)]
    max_words: Option<i64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the settings shell (default)
    Tui,
    /// Fetch transactions from the banking sandbox and print them
    Transactions {
        /// How many days back to fetch
        #[arg(long)]
        days: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("pocketbook.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // A broken config file shouldn't keep the app from starting; the TUI
    // shows it in the error dialog, the console command prints it.
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            (PocketbookConfig::default(), Some(e))
        }
    };

    let days = match &args.command {
        Some(Command::Transactions { days }) => *days,
        _ => None,
    };
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            max_words: args.max_words,
            days,
        },
    );

    match args.command {
        Some(Command::Transactions { .. }) => {
            if let Some(e) = config_error {
                eprintln!("warning: {e}; using defaults");
            }
            let client = SandboxClient::new(resolved.sandbox);
            match console::fetch_and_format(&client).await {
                Ok(table) => {
                    print!("{table}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    log::warn!("Transaction fetch failed: {}", e);
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Some(Command::Tui) | None => {
            log::info!("Pocketbook starting up (max words: {})", resolved.max_words);
            let startup_error =
                config_error.map(|e| ErrorReport::new("Configuration error", e.to_string()));
            match pocketbook::tui::run(resolved, startup_error) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
