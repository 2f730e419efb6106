//! Finboard report
//!
//! Reads a dashboard snapshot (budgets, goals, transactions, trend) as JSON
//! and prints the computed dashboard view-model as JSON on stdout.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finboard_core::dashboard::{DashboardService, Snapshot};
use finboard_core::ranking::SortKey;
use finboard_shared::types::{Currency, Locale};
use finboard_shared::{AppConfig, AppError, AppResult};

#[derive(Parser)]
#[command(
    name = "finboard",
    version,
    about = "Compute personal-finance dashboard metrics from a JSON snapshot"
)]
struct Cli {
    /// Snapshot file, or `-` to read from stdin
    snapshot: PathBuf,

    /// Category order: category, spent, remaining, or progress
    #[arg(short, long, default_value = "category")]
    sort: SortKey,

    /// Reference time for goal deadlines (RFC 3339); defaults to now
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Display locale, overriding configuration
    #[arg(long)]
    locale: Option<Locale>,

    /// Display currency, overriding configuration
    #[arg(long)]
    currency: Option<Currency>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finboard=info,finboard_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        let app_error = err.chain().find_map(|e| e.downcast_ref::<AppError>());
        let code = app_error.map_or("INTERNAL_ERROR", AppError::error_code);
        eprintln!("Error [{code}]: {err:#}");
        std::process::exit(app_error.map_or(1, AppError::exit_code));
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(locale) = cli.locale {
        config.display.locale = locale;
    }
    if let Some(currency) = cli.currency {
        config.display.currency = currency;
    }

    let raw = read_snapshot(&cli.snapshot)?;
    let snapshot = Snapshot::from_json(&raw).map_err(|err| {
        AppError::DataSource(format!(
            "Failed to parse snapshot {}: {err}",
            cli.snapshot.display()
        ))
    })?;
    info!(
        budgets = snapshot.budgets.len(),
        goals = snapshot.goals.len(),
        transactions = snapshot.transactions.len(),
        locale = %config.display.locale,
        currency = %config.display.currency,
        "Snapshot loaded"
    );

    let service = DashboardService::new(&config);
    let view = service.build(&snapshot, cli.now.unwrap_or_else(Utc::now), cli.sort);

    let output = if cli.compact {
        serde_json::to_string(&view)
    } else {
        serde_json::to_string_pretty(&view)
    }
    .map_err(|err| AppError::Internal(format!("Failed to serialize dashboard: {err}")))?;
    println!("{output}");

    Ok(())
}

fn read_snapshot(path: &Path) -> AppResult<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(|err| {
            AppError::DataSource(format!("Failed to read snapshot from stdin: {err}"))
        })?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(|err| {
        AppError::DataSource(format!("Failed to read snapshot {}: {err}", path.display()))
    })
}
