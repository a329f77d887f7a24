mod api;
mod config;
mod editor;
mod errors;
mod models;
mod stats;
mod sync;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::models::{DashboardStats, Signal, Trade};
use crate::sync::{
    spawn_poller, PollView, SIGNALS_POLL_PERIOD, STATS_POLL_PERIOD, TRADES_POLL_PERIOD,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(backend = %config.backend_url, "Dashboard client starting");

    let client = ApiClient::new(reqwest::Client::new(), config.api_base());

    let stats_view: PollView<DashboardStats> = PollView::new();
    let signals_view: PollView<Vec<Signal>> = PollView::new();
    let trades_view: PollView<Vec<Trade>> = PollView::new();

    let stats_poller = {
        let client = client.clone();
        spawn_poller("stats", STATS_POLL_PERIOD, stats_view.clone(), move || {
            let client = client.clone();
            async move { client.get_stats().await }
        })
    };

    let signals_poller = {
        let client = client.clone();
        let limit = config.signal_limit;
        spawn_poller("signals", SIGNALS_POLL_PERIOD, signals_view.clone(), move || {
            let client = client.clone();
            async move { client.get_signals(Some(limit)).await }
        })
    };

    let trades_poller = {
        let client = client.clone();
        let limit = config.trade_limit;
        spawn_poller("trades", TRADES_POLL_PERIOD, trades_view.clone(), move || {
            let client = client.clone();
            async move { client.get_trades(Some(limit)).await }
        })
    };

    // Log a summary line whenever the stats view picks up a fresh aggregate.
    let reporter = tokio::spawn(async move {
        let mut last_seq = 0u64;
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(1)).await;

            let snap = stats_view.snapshot();
            if snap.seq == last_seq {
                continue;
            }
            last_seq = snap.seq;

            let signals = signals_view.snapshot();
            let trades = trades_view.snapshot();
            tracing::info!(
                total_signals = snap.data.total_signals,
                total_trades = snap.data.total_trades,
                open_trades = snap.data.open_trades,
                total_profit = %snap.data.total_profit,
                today_profit = %snap.data.today_profit,
                success_rate = %snap.data.success_rate,
                recent_signals = signals.data.len(),
                recent_trades = trades.data.len(),
                "Dashboard refreshed"
            );
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down pollers");

    reporter.abort();
    stats_poller.join().await;
    signals_poller.join().await;
    trades_poller.join().await;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
