use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tutorme::{App, Config};
use tutorme::history::History;

#[derive(Parser)]
#[command(name = "tutorme")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List saved sessions, newest first
    History,
    /// Delete a saved session by id
    Forget {
        /// Id shown by the history command
        id: u64,
    },
    /// Clear the calibrated grade so the selection screen runs again
    ResetCalibration,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutorme=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::History) => {
            let history = History::load()?;
            if history.is_empty() {
                println!("No saved sessions.");
            }
            for entry in history.entries() {
                println!("{:>4}  [{}] {}", entry.id, entry.mode.label(), entry.title);
            }
        }
        Some(Commands::Forget { id }) => {
            let mut history = History::load()?;
            if history.remove(id) {
                history.save()?;
                println!("Deleted session {}.", id);
            } else {
                println!("No session with id {}.", id);
            }
        }
        Some(Commands::ResetCalibration) => {
            let mut config = Config::load()?;
            config.grade = None;
            config.save()?;
            println!("Calibration reset; the selection screen will run on next launch.");
        }
        None => {
            // Launch TUI
            let config = Config::load()?;
            let mut app = App::new(config)?;
            app.run().await?;
        }
    }

    Ok(())
}
