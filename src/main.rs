use std::sync::Arc;

use clap::{Parser, Subcommand};
use signal_dashboard::config::ClientConfig;
use signal_dashboard::external::HttpBackend;
use signal_dashboard::logging::{init_logging, LoggingConfig};
use signal_dashboard::models::UserSettings;
use signal_dashboard::render::ConsoleRenderer;
use signal_dashboard::services::{history_service, settings_service, symbol_service, RandomSentimentAnalyzer};
use signal_dashboard::{App, AppState};

#[derive(Parser, Debug)]
#[command(name = "signal-dashboard", about = "Trading-signal dashboard client")]
struct Cli {
    /// Answer yes to confirmation prompts
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show stats and the activity feed
    Dashboard,
    /// List stored analyses
    History,
    /// Switch to a view by name
    View { name: String },
    /// Analyze a ticker
    Analyze {
        ticker: String,
        #[arg(long)]
        model: Option<String>,
    },
    /// Record the outcome of an analysis
    Feedback {
        id: String,
        /// Mark as a loss instead of a win
        #[arg(long)]
        loss: bool,
    },
    /// Delete an analysis after confirmation
    Delete { id: String },
    /// Search the symbol catalogue
    Search { query: String },
    /// Show or update risk settings
    Settings {
        #[arg(long)]
        balance: Option<f64>,
        #[arg(long)]
        risk: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env()).map_err(|e| anyhow::anyhow!("logging setup failed: {}", e))?;

    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;
    tracing::info!("Using backend at {}", config.backend_url);

    let backend = HttpBackend::new(&config)?;
    let state = AppState::new(
        Arc::new(backend),
        Arc::new(RandomSentimentAnalyzer::new()),
        Arc::new(ConsoleRenderer::new(cli.yes)),
        config.default_model.clone(),
        config.feed_size,
    );
    let app = App::new(state);

    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            app.start().await;
        }
        Command::History => {
            app.navigator().switch_view("history").await;
        }
        Command::View { name } => {
            app.navigator().switch_view(&name).await;
        }
        Command::Analyze { ticker, model } => {
            app.navigator().switch_view("analyze").await;
            let model = model.unwrap_or_else(|| config.default_model.clone());
            // Failures are already shown by the session; blank input is a no-op.
            let _ = app.session().run_analysis(&ticker, &model).await;
        }
        Command::Feedback { id, loss } => {
            history_service::submit_feedback(app.state(), &id, !loss).await?;
        }
        Command::Delete { id } => {
            if !history_service::delete_analysis(app.state(), &id).await? {
                println!("Nothing deleted.");
            }
        }
        Command::Search { query } => {
            let matches: Vec<_> = if query.trim().is_empty() {
                symbol_service::catalogue().iter().collect()
            } else {
                symbol_service::search(&query)
            };
            for symbol in matches {
                println!("{:<10} {}", symbol.symbol, symbol.name);
            }
        }
        Command::Settings { balance, risk } => {
            let current = settings_service::load_settings(app.state())
                .await
                .unwrap_or_else(|e| {
                    tracing::warn!("Settings load failed, using defaults: {}", e);
                    UserSettings::default()
                });
            if balance.is_some() || risk.is_some() {
                let updated = UserSettings {
                    account_balance: balance.unwrap_or(current.account_balance),
                    risk_per_trade_pct: risk.unwrap_or(current.risk_per_trade_pct),
                    ..current
                };
                settings_service::save_settings(app.state(), updated).await?;
            }
        }
    }

    Ok(())
}
