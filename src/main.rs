//! Library Desk - interactive terminal front end

use std::path::Path;

use anyhow::{anyhow, Context};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

use library_desk::{
    cli::{self, Command, Flow},
    config::{AppConfig, LogFormat, LoggingConfig},
    ApiClient, Services, Synchronizer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let _guard = init_tracing(&config.logging)?;

    tracing::info!("Starting Library Desk v{}", env!("CARGO_PKG_VERSION"));

    let client = ApiClient::new(&config.api).context("Failed to create HTTP client")?;
    tracing::info!("Using backend at {}", client.base_url());

    let mut desk = Synchronizer::new(Services::new(client));
    desk.load().await;

    println!("{}", cli::render_frame(&mut desk));
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        if command == Command::Help {
            println!("{}", cli::HELP);
            continue;
        }

        if cli::dispatch(&mut desk, command).await == Flow::Quit {
            break;
        }

        println!("{}", cli::render_frame(&mut desk));
    }

    tracing::info!("Library Desk stopped");
    Ok(())
}

/// Install the global subscriber; keep the returned guard alive to flush file logs
fn init_tracing(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_desk={}", config.level).into());

    // stdout carries the UI
    let (writer, guard) = match &config.file {
        Some(file) => {
            let path = Path::new(file);
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("logging.file '{}' has no file name", file))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(config.file.is_none());

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry.with(layer.json()).try_init(),
        LogFormat::Pretty => registry.with(layer).try_init(),
    }
    .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
