use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use super::{ConfirmPrompt, Renderer};
use crate::models::{
    ActivityRow, AnalysisView, AssetKind, DashboardStats, FeedbackStatus, HistoryRow, UserSettings,
    View, ViewHeader,
};

/// Plain-text renderer used by the command line binary.
pub struct ConsoleRenderer {
    assume_yes: bool,
}

impl ConsoleRenderer {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

fn status_marker(status: FeedbackStatus) -> &'static str {
    match status {
        FeedbackStatus::Pending => "·",
        FeedbackStatus::Won => "✔",
        FeedbackStatus::Lost => "✘",
    }
}

#[async_trait]
impl Renderer for ConsoleRenderer {
    fn set_active_view(&self, view: Option<View>) {
        if view.is_none() {
            println!("(no view active)");
        }
    }

    fn show_header(&self, header: ViewHeader) {
        println!("\n== {} ==\n{}", header.title, header.subtitle);
    }

    fn show_stats(&self, stats: &DashboardStats) {
        println!(
            "Analyses: {}  Win rate: {}%  Net R: {:.1}  Veto rate: {}%",
            stats.total_analyses, stats.win_rate_pct, stats.total_r, stats.veto_rate_pct
        );
    }

    fn show_activity_feed(&self, rows: &[ActivityRow]) {
        if rows.is_empty() {
            println!("No activity yet.");
            return;
        }
        for row in rows {
            let icon = match row.asset {
                AssetKind::Crypto => "₿",
                AssetKind::Market => "📈",
            };
            println!(
                "{} {:<10} {:<20} {:>10}  {}",
                icon,
                row.ticker,
                row.timestamp,
                row.status.feed_label(),
                row.entry_text
            );
        }
    }

    fn show_history_loading(&self) {
        println!("Loading history...");
    }

    fn show_history(&self, rows: &[HistoryRow]) {
        if rows.is_empty() {
            println!("No analyses stored.");
            return;
        }
        for row in rows {
            println!(
                "{} [{}] {} {}  {} | {} | {}  {}",
                status_marker(row.status),
                row.id,
                row.ticker,
                row.timestamp,
                row.entry_text,
                row.take_profit_text,
                row.stop_loss_text,
                row.status.history_label()
            );
        }
    }

    fn show_history_error(&self, message: &str) {
        println!("Failed to load history: {}", message);
    }

    fn set_loading(&self, visible: bool) {
        if visible {
            println!("Analyzing...");
        }
    }

    fn set_results_visible(&self, _visible: bool) {}

    fn show_analysis(&self, view: &AnalysisView) {
        let levels = &view.levels;
        println!("\n{}", view.ticker);
        println!(
            "Entry {}  TP {}  SL {}  RSI {}",
            levels.entry, levels.take_profit, levels.stop_loss, levels.rsi
        );
        println!("Verdict: {}", levels.verdict);

        if let (Some(first), Some(last)) = (view.chart.first(), view.chart.last()) {
            println!(
                "Chart: {} candles {} .. {} (last close {:.2})",
                view.chart.len(),
                first.time,
                last.time,
                last.close
            );
        }

        let gauge = &view.gauge;
        println!(
            "Sentiment {} ({:.0}%)  bullish {} / bearish {} / neutral {}",
            gauge.score_text, gauge.fill_pct, gauge.bullish_count, gauge.bearish_count, gauge.neutral_count
        );
        println!("{} - {}", view.context.title, view.context.subtitle);

        if view.news.is_empty() {
            println!("No news available");
        }
        for item in view.news.iter().take(5) {
            let label = item
                .sentiment
                .map(|s| s.to_string().to_uppercase())
                .unwrap_or_default();
            let title: String = item.title.chars().take(80).collect();
            println!("  [{}] {} ({})", label, title, item.source);
        }

        if let Some(risk) = &view.risk {
            println!(
                "Risk {} ({})  Units {}  Notional {}  Leverage {}",
                risk.risk_amount, risk.risk_share, risk.recommended_units, risk.notional_value, risk.leverage
            );
        }
    }

    fn show_settings(&self, settings: &UserSettings) {
        println!(
            "Account balance: {:.2}  Risk per trade: {}%  Max leverage: x{}",
            settings.account_balance, settings.risk_per_trade_pct, settings.max_leverage
        );
    }

    fn notify(&self, message: &str) {
        println!("{}", message);
    }

    fn show_error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }

    async fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        if self.assume_yes {
            return true;
        }

        println!("{}\n{} [{}? y/N]", prompt.title, prompt.message, prompt.confirm_label);
        let mut answer = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        match stdin.read_line(&mut answer).await {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }
}
