use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hours_analyzer::api::{AppState, create_router};
use hours_analyzer::calculation::summarize_period;
use hours_analyzer::config::ConfigLoader;
use hours_analyzer::store::{CsvRecordStore, MemoryRecordStore, RecordStore};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hours-analyzer", about = "Work hours and pay analyzer")]
struct Cli {
    /// Directory holding schedule.yaml and premiums.yaml (built-in 2025 schedule when unset)
    #[arg(long, env = "HOURS_CONFIG_DIR", global = true)]
    config_dir: Option<PathBuf>,

    /// CSV file with the date,hours,payforaverage records
    #[arg(long, env = "HOURS_DATA_FILE", global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, env = "HOURS_BIND", default_value = "127.0.0.1:3000")]
        bind: String,
    },
    /// Print the summary of one period
    Summary {
        /// Period number (1-12)
        period_id: u32,
        /// Base hourly rate for the night-shift differential
        #[arg(long)]
        base_hourly_rate: Option<Decimal>,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the twelve periods
    Periods,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config_dir {
        Some(dir) => ConfigLoader::load(dir)?,
        None => ConfigLoader::builtin(),
    };
    info!(schedule = %config.schedule_name(), "Loaded configuration");

    match cli.command {
        Commands::Serve { bind } => {
            let state = match &cli.data_file {
                Some(path) => {
                    info!(path = %path.display(), "Using CSV record store");
                    AppState::new(config, CsvRecordStore::new(path))
                }
                None => {
                    info!("No data file configured, records are kept in memory");
                    AppState::new(config, MemoryRecordStore::default())
                }
            };

            let listener = tokio::net::TcpListener::bind(&bind).await?;
            info!(address = %bind, "Starting API server");
            axum::serve(listener, create_router(state)).await?;
        }
        Commands::Summary {
            period_id,
            base_hourly_rate,
            json,
        } => {
            let path = cli
                .data_file
                .ok_or("a data file is required: pass --data-file or set HOURS_DATA_FILE")?;
            let records = CsvRecordStore::new(path).load()?;
            let report = summarize_period(
                config.calendar(),
                config.premium_rules(),
                period_id,
                &records,
                config.base_hourly_rate(base_hourly_rate),
            )?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
        }
        Commands::Periods => {
            for period in config.calendar().periods() {
                let range = period.primary_range;
                match period.premium_range {
                    Some(premium) => println!(
                        "{:>2}  {:<28} {} to {}  (premiums {} to {})",
                        period.id, period.label, range.start, range.end, premium.start, premium.end
                    ),
                    None => println!(
                        "{:>2}  {:<28} {} to {}",
                        period.id, period.label, range.start, range.end
                    ),
                }
            }
        }
    }

    Ok(())
}
