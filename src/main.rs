//! Demo binary: wires a [`StrategyRuntime`] to the in-memory paper
//! collaborator and runs the signal-gate -> state-machine -> auto-merge
//! loop against a single simulated market, the way a real binary would
//! wire the same core to a live exchange adapter instead.
//!
//! Grounded on the teacher's `main.rs`: `tracing_subscriber::fmt()` with
//! `EnvFilter::from_default_env()`, then one `tokio::spawn` per background
//! task with the main task driving the strategy loop directly.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use pm_pair_core::collaborator::{Collaborator, TopOfBook};
use pm_pair_core::config::Config;
use pm_pair_core::kinematics::PriceKinematicsTracker;
use pm_pair_core::market::Market;
use pm_pair_core::paired_state_machine::PairedStateMachine;
use pm_pair_core::paper::PaperCollaborator;
use pm_pair_core::report;
use pm_pair_core::signal_gate::{GateDecision, SignalGate};
use pm_pair_core::state::StrategyRuntime;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = Config::default().normalized();

    let market = Market {
        slug: "BTC-15m-1".into(),
        condition_id: "cid-1".into(),
        yes_asset_id: "asset-up".into(),
        no_asset_id: "asset-down".into(),
        cycle_start_unix: 0,
    };

    let runtime = Arc::new(StrategyRuntime::new(market.clone(), cfg.window_seconds));
    let collaborator: Arc<dyn Collaborator> = Arc::new(PaperCollaborator::new(TopOfBook {
        yes_bid: Some(48),
        yes_ask: Some(52),
        no_bid: Some(46),
        no_ask: Some(50),
    }));

    {
        let cfg = cfg.clone();
        let market = market.clone();
        let runtime = runtime.clone();
        let collaborator = collaborator.clone();
        tokio::spawn(async move {
            let mut sweep_interval = tokio::time::interval(Duration::from_millis(cfg.converge_interval_ms.max(1)));
            loop {
                sweep_interval.tick().await;
                let trade = runtime.paired_trade.lock().unwrap().clone();
                PairedStateMachine::sweep_orphan_orders(&cfg, &market, &trade, collaborator.as_ref()).await;
            }
        });
    }

    let started_at = Instant::now();
    let mut interval = tokio::time::interval(Duration::from_millis(cfg.risk_check_interval_ms.min(1_000)));

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = tick(&cfg, &market, &started_at, &runtime, collaborator.as_ref()).await {
                    tracing::warn!(error = %e, "strategy tick failed");
                }
            }
            _ = runtime.notify.notified() => {
                if let Err(e) = tick(&cfg, &market, &started_at, &runtime, collaborator.as_ref()).await {
                    tracing::warn!(error = %e, "strategy tick failed");
                }
            }
        }
    }
}

async fn tick(
    cfg: &Config,
    market: &Market,
    started_at: &Instant,
    runtime: &StrategyRuntime,
    collaborator: &dyn Collaborator,
) -> Result<()> {
    let top = collaborator.get_top_of_book(market).await?;
    let now = Instant::now();
    let now_ms = now.duration_since(*started_at).as_millis() as i64;

    {
        let mut kinematics = runtime.kinematics.lock().unwrap();
        if let Some(cents) = top.yes_ask {
            kinematics.add(pm_pair_core::types::TokenType::Up, now_ms, cents);
        }
        if let Some(cents) = top.no_ask {
            kinematics.add(pm_pair_core::types::TokenType::Down, now_ms, cents);
        }
    }

    let decision = {
        let trade = runtime.paired_trade.lock().unwrap();
        let kinematics = runtime.kinematics.lock().unwrap();
        evaluate_gate(cfg, market, started_at, &trade, &kinematics, now_ms, now, top.yes_ask, top.no_ask)
    };

    if let GateDecision::Enter { token, price_cents } = decision {
        let mut trade = runtime.paired_trade.lock().unwrap().clone();
        PairedStateMachine::enter(cfg, market, &mut trade, token, price_cents, cfg.order_size, collaborator).await?;
        *runtime.paired_trade.lock().unwrap() = trade.clone();
        report::log_paired_trade(&market.slug, &trade);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn evaluate_gate(
    cfg: &Config,
    market: &Market,
    started_at: &Instant,
    trade: &pm_pair_core::state::paired_trade::PairedTrade,
    kinematics: &PriceKinematicsTracker,
    now_ms: i64,
    now: Instant,
    yes_ask: Option<u8>,
    no_ask: Option<u8>,
) -> GateDecision {
    let cycle_end_unix = market.cycle_end_unix();
    SignalGate::evaluate(
        cfg,
        market,
        &market.slug,
        *started_at,
        trade,
        kinematics,
        now_ms,
        now,
        yes_ask,
        no_ask,
        cycle_end_unix,
        market.cycle_start_unix,
        &[],
        None,
    )
}
