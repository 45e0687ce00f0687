use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use gymledger::application::insights::{self, CannedInsightProvider, DEFAULT_QUESTION};
use gymledger::application::service::GymService;
use gymledger::config::Config;
use gymledger::domain::calendar;
use gymledger::domain::member::{MemberStatus, filter_members};
use gymledger::domain::notification::{AlertTracker, NotificationCenter};
use gymledger::domain::ports::DocumentStoreBox;
use gymledger::infrastructure::in_memory::InMemoryDocumentStore;
use gymledger::infrastructure::seed;
use gymledger::interfaces::csv::member_writer::MemberWriter;
use gymledger::interfaces::csv::payment_reader::PaymentReader;
use gymledger::interfaces::report::DashboardReport;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    /// Reference date for billing classification (defaults to the local date)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record payments from a CSV file, then print the member table
    Import {
        /// Payments CSV file
        input: PathBuf,
    },
    /// Print the member table
    Members {
        /// Only members with this status
        #[arg(long)]
        status: Option<MemberStatus>,

        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Print dashboard statistics as JSON
    Dashboard,
    /// Ask the insights assistant about the current figures
    Insights {
        question: Option<String>,

        /// Also print the figures sent with the question
        #[arg(long)]
        show_context: bool,
    },
    /// List classes in the coming days
    Classes {
        #[arg(long, default_value_t = 7)]
        days: i64,

        /// Only classes on this date
        #[arg(long)]
        on: Option<NaiveDate>,
    },
}

fn open_store(db_path: Option<PathBuf>) -> Result<DocumentStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            let store =
                gymledger::infrastructure::rocksdb::RocksDBStore::open(path).into_diagnostic()?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            warn!(
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to in-memory storage."
            );
            Ok(Box::new(InMemoryDocumentStore::new()))
        }
        None => Ok(Box::new(InMemoryDocumentStore::new())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gymledger=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path).into_diagnostic()?,
        None => Config::default(),
    };
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let service = GymService::new(open_store(cli.db_path)?, config);

    match cli.command {
        Command::Import { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = PaymentReader::new(file);
            let mut recorded = 0usize;
            for payment in reader.payments() {
                match payment {
                    Ok(payment) => match service.record_payment(payment).await {
                        Ok(_) => recorded += 1,
                        Err(e) => error!("Error recording payment: {}", e),
                    },
                    Err(e) => error!("Error reading payment: {}", e),
                }
            }
            info!(recorded, "Import finished");

            let members = service.members().await.into_diagnostic()?;
            let mut writer = MemberWriter::new(io::stdout().lock());
            writer
                .write_members(&members, service.engine(), today)
                .into_diagnostic()?;
        }
        Command::Members { status, search } => {
            let members = service.members().await.into_diagnostic()?;
            let mut writer = MemberWriter::new(io::stdout().lock());
            writer
                .write_members(
                    filter_members(&members, &search, status),
                    service.engine(),
                    today,
                )
                .into_diagnostic()?;
        }
        Command::Dashboard => {
            let stats = service.dashboard(today).await.into_diagnostic()?;
            let mut center = NotificationCenter::new();
            if let Some(alert) = AlertTracker::new().observe(&stats, Local::now().naive_local()) {
                warn!("{}: {}", alert.title, alert.message);
                center.push(alert);
            }
            let report = DashboardReport::new(&stats, today).with_alerts(center.notifications());
            serde_json::to_writer_pretty(io::stdout().lock(), &report).into_diagnostic()?;
            println!();
        }
        Command::Insights {
            question,
            show_context,
        } => {
            let stats = service.dashboard(today).await.into_diagnostic()?;
            if show_context {
                println!("{}\n", insights::insight_context(&stats));
            }
            let question = question.as_deref().unwrap_or(DEFAULT_QUESTION);
            println!("{}", insights::ask(&CannedInsightProvider, &stats, question).await);
        }
        Command::Classes { days, on } => {
            let events = seed::events();
            let listed = match on {
                Some(date) => calendar::events_on(&events, date),
                None => calendar::upcoming(&events, today, days),
            };
            for event in listed {
                println!(
                    "{} {} {} ({}, {})",
                    event.date,
                    event.time.format("%H:%M"),
                    event.title,
                    event.instructor,
                    event.category
                );
            }
        }
    }

    Ok(())
}
