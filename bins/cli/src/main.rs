//! SpendLens demo driver
//!
//! Seeds sample expenses, then prints the dashboard and both insight tiers.
//!
//! Usage: cargo run --bin spendlens

mod seed;

use anyhow::Context;
use spendlens_core::category::CategoryRegistry;
use spendlens_core::dashboard::DashboardSnapshot;
use spendlens_core::insight::{AnalysisSnapshot, InsightCoordinator, InsightService, InsightTier};
use spendlens_core::tracker::ExpenseTracker;
use spendlens_shared::{AppConfig, AppResult};
use spendlens_shared::types::{Currency, Money};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendlens=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(
        currency = %config.currency,
        goal = %config.goal.monthly_target,
        "Configuration loaded"
    );

    let coordinator = InsightCoordinator::new(InsightService::new(
        config.insights.clone(),
        config.currency,
    ));
    let tracker = seeded_tracker(&config, coordinator.clone())?;

    print_dashboard(&tracker.dashboard(), config.currency);

    // Every seeded expense superseded the previous basic request; wait for the last one.
    let latest = coordinator.latest_sequence();
    let mut receiver = coordinator.subscribe();
    let basic = receiver
        .wait_for(|snapshot| snapshot.sequence == latest)
        .await?
        .clone();
    print_analysis(&basic);

    let published = coordinator
        .refresh(
            InsightTier::Detailed,
            tracker.expenses().to_vec(),
            tracker.summary().clone(),
        )
        .await?;
    if published {
        print_analysis(&coordinator.current());
    }

    Ok(())
}

fn seeded_tracker(config: &AppConfig, coordinator: InsightCoordinator) -> AppResult<ExpenseTracker> {
    let mut tracker = ExpenseTracker::from_config(&config.goal, CategoryRegistry::default())?
        .with_insights(coordinator);

    for expense in seed::sample_expenses() {
        tracker.add(expense)?;
    }

    Ok(tracker)
}

fn print_dashboard(dashboard: &DashboardSnapshot, currency: Currency) {
    let money = |amount| Money::new(amount, currency);

    println!("== Resumo ==");
    println!("Total: {} em {} despesas", money(dashboard.summary.total), dashboard.summary.count);

    println!("\n== Categorias ==");
    for share in &dashboard.shares {
        println!(
            "{:<14} {:>12} {:>6.1}%  {}",
            share.category,
            money(share.amount).to_string(),
            share.percentage,
            share.color
        );
    }

    println!("\n== Meses ==");
    for point in &dashboard.recent_months {
        println!("{}  {}", point.month, money(point.amount));
    }
    if let Some(trend) = &dashboard.trend {
        println!(
            "{} -> {}: {} ({:.1}%)",
            trend.previous_month,
            trend.latest_month,
            money(trend.delta),
            trend.percent_change
        );
    }

    let goal = &dashboard.goal;
    println!("\n== Meta mensal ==");
    println!(
        "{} de {} ({:.1}%), {} {}",
        money(goal.current_spending),
        money(goal.goal),
        goal.progress_percentage,
        if goal.is_over_budget { "excedido" } else { "restante" },
        money(goal.remaining_abs)
    );
}

fn print_analysis(snapshot: &AnalysisSnapshot) {
    let title = match snapshot.tier {
        Some(InsightTier::Detailed) => "Análise detalhada",
        _ => "Análise",
    };

    println!("\n== {title} ==");
    for insight in &snapshot.analysis.insights {
        println!("- {insight}");
    }
    println!("Sugestões:");
    for suggestion in &snapshot.analysis.suggestions {
        println!("- {suggestion}");
    }
}
