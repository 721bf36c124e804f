use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{LoggingSettings, ServeOverrides, Settings, load_settings};
use core_types::{Company, Investment, Profit};
use database::{MemoryStore, PgStores, connect, run_migrations};
use serde::Deserialize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use web_server::{AppState, PlanningData, run_server};

/// Rows loaded by `serve --in-memory`.
const PLACEHOLDER_DATA: &str = include_str!("../data/placeholder.json");

/// The main entry point for the Finboard dashboard.
#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut settings = load_settings().context("Failed to load configuration")?;
    let _log_guard = init_tracing(&settings.logging)?;

    match cli.command {
        Commands::Serve { overrides, in_memory } => {
            settings.apply_overrides(&overrides);
            handle_serve(settings, in_memory).await?;
        }
        Commands::Migrate => {
            handle_migrate(&settings).await?;
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A dashboard for tracking investments in companies.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard web server.
    Serve {
        #[command(flatten)]
        overrides: ServeOverrides,
        /// Serve the bundled placeholder data instead of connecting to PostgreSQL.
        #[arg(long)]
        in_memory: bool,
    },
    /// Apply pending database migrations and exit.
    Migrate,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(settings: Settings, in_memory: bool) -> Result<()> {
    let addr = settings.server.socket_addr()?;
    let locale = settings.display.locale;
    let planning = PlanningData::bundled().context("Bundled planning data is malformed")?;

    let state = if in_memory {
        tracing::warn!("Serving placeholder data from memory; changes are lost on exit.");
        AppState::in_memory(placeholder_store()?, locale, planning)
    } else {
        settings.validate_for_database()?;
        let pool = connect(&settings.database).await?;
        run_migrations(&pool).await?;
        AppState::postgres(PgStores::new(pool), locale, planning)
    };

    run_server(addr, state).await
}

async fn handle_migrate(settings: &Settings) -> Result<()> {
    settings.validate_for_database()?;
    let pool = connect(&settings.database).await?;
    run_migrations(&pool).await?;
    tracing::info!("Migrations are up to date.");
    Ok(())
}

#[derive(Deserialize)]
struct Placeholder {
    companies: Vec<Company>,
    investments: Vec<Investment>,
    profit: Vec<Profit>,
}

fn placeholder_store() -> Result<MemoryStore> {
    let data: Placeholder =
        serde_json::from_str(PLACEHOLDER_DATA).context("Placeholder data is malformed")?;
    Ok(MemoryStore::with_data(data.companies, data.investments, data.profit)?)
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. With a log directory set, output goes to a daily file
/// and the returned guard must live until exit.
fn init_tracing(logging: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("Invalid log level")?;

    match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "finboard.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok(Some(guard))
        }
        None => {
            let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok(None)
        }
    }
}
