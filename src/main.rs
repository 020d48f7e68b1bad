use anyhow::{bail, Context};
use clap::Parser;
use sport_events::adapters::{start_api_server, InMemoryStore, PostgresStore, SportEventStore};
use sport_events::api::AppState;
use sport_events::cli::{Cli, Commands};
use sport_events::config::{AppConfig, LoggingConfig};
use sport_events::domain::SystemClock;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config_dir)
        .with_context(|| format!("failed to load config from {}", cli.config_dir.display()))?;

    if let Some(Commands::Serve { port: Some(port) }) = &cli.command {
        config.server.port = *port;
    }

    if let Err(errors) = config.validate() {
        bail!("invalid configuration: {}", errors.join("; "));
    }

    let _log_guard = init_logging(&config.logging);

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { .. } => run_server(config).await,
        Commands::Migrate => run_migrations(&config).await,
    }
}

async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let (store, store_kind) = open_store(&config).await?;
    let addr = config
        .bind_addr()
        .map_err(anyhow::Error::msg)
        .context("invalid server address")?;

    let state = AppState::new(store, store_kind, Arc::new(SystemClock));
    info!(store = store_kind, "Starting sport events service");

    start_api_server(state, addr, shutdown_signal()).await?;
    Ok(())
}

async fn run_migrations(config: &AppConfig) -> anyhow::Result<()> {
    let Some(url) = config.database.url.as_deref() else {
        bail!("database.url is not configured; nothing to migrate");
    };

    let store = PostgresStore::new(url, config.database.max_connections)
        .await
        .context("failed to connect to PostgreSQL")?;
    store.migrate().await.context("failed to run migrations")?;
    Ok(())
}

async fn open_store(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn SportEventStore>, &'static str)> {
    match config.database.url.as_deref() {
        Some(url) => {
            let store = PostgresStore::new(url, config.database.max_connections)
                .await
                .context("failed to connect to PostgreSQL")?;
            if config.database.run_migrations {
                store.migrate().await.context("failed to run migrations")?;
            }
            let store: Arc<dyn SportEventStore> = Arc::new(store);
            Ok((store, "postgres"))
        }
        None => {
            warn!("database.url not set; events are kept in memory and lost on restart");
            let store: Arc<dyn SportEventStore> = Arc::new(InMemoryStore::new());
            Ok((store, "memory"))
        }
    }
}

fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},sqlx=warn", config.level)));

    let stdout_layer = if config.json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "sport-events.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
