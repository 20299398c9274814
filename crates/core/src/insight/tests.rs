//! Tests for insight generation and coordination.

use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use spendlens_shared::config::InsightConfig;
use spendlens_shared::types::{Currency, ExpenseId};

use super::coordinator::InsightCoordinator;
use super::service::InsightService;
use super::types::{format_percent, InsightTier};
use super::{basic, detailed};
use crate::expense::ExpenseRecord;
use crate::summary::SummaryService;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(amount: Decimal, category: &str, on: NaiveDate) -> ExpenseRecord {
    ExpenseRecord {
        id: ExpenseId::new(),
        description: format!("{category} {amount}"),
        amount,
        category: category.to_string(),
        date: on,
    }
}

/// Five records totalling 1000 in January 2024, Wednesday through Sunday.
fn week_of_spending() -> Vec<ExpenseRecord> {
    vec![
        record(dec!(250), "Alimentação", date(2024, 1, 10)),
        record(dec!(150), "Alimentação", date(2024, 1, 11)),
        record(dec!(300), "Transporte", date(2024, 1, 12)),
        record(dec!(200), "Moradia", date(2024, 1, 13)),
        record(dec!(100), "Lazer", date(2024, 1, 14)),
    ]
}

fn service(basic_ms: u64, detailed_ms: u64) -> InsightService {
    InsightService::new(
        InsightConfig {
            basic_delay_ms: basic_ms,
            detailed_delay_ms: detailed_ms,
        },
        Currency::Brl,
    )
}

fn generate(tier: InsightTier, expenses: &[ExpenseRecord], today: NaiveDate) -> super::AiAnalysis {
    let summary = SummaryService::summarize(expenses);
    InsightService::default().generate(tier, expenses, &summary, today)
}

// ============================================================================
// Basic tier
// ============================================================================

#[test]
fn test_basic_empty_fallback() {
    let analysis = generate(InsightTier::Basic, &[], date(2024, 1, 1));

    assert_eq!(analysis.insights, vec![basic::EMPTY_INSIGHT]);
    assert_eq!(analysis.suggestions, vec![basic::EMPTY_SUGGESTION]);
    assert!(!analysis.loading);
}

#[test]
fn test_basic_cites_top_category_amount_and_share() {
    let analysis = generate(InsightTier::Basic, &week_of_spending(), date(2024, 1, 16));

    assert_eq!(
        analysis.insights,
        vec![
            "💰 Você gastou um total de R$ 1000.00 no período analisado.",
            "🎯 Sua maior categoria de gasto é \"Alimentação\" com R$ 400.00 (40.0% do total).",
            "🧾 Seu gasto médio por despesa é de R$ 200.00.",
        ]
    );
    assert_eq!(
        analysis.suggestions,
        vec![
            "💡 Considere definir um limite mensal para \"Alimentação\" e acompanhe semanalmente.",
            "📊 Defina um orçamento mensal de R$ 900.00 para reduzir gastos em 10%.",
            "🏦 Guardando 10% por mês (R$ 100.00), você acumularia R$ 1200.00 em 12 meses.",
        ]
    );
}

#[test]
fn test_basic_trend_statements() {
    let increase = vec![
        record(dec!(1000), "Moradia", date(2024, 1, 5)),
        record(dec!(1200), "Moradia", date(2024, 2, 5)),
    ];
    let decrease = vec![
        record(dec!(1000), "Moradia", date(2023, 12, 5)),
        record(dec!(750), "Moradia", date(2024, 1, 5)),
    ];
    let stable = vec![
        record(dec!(300), "Moradia", date(2024, 9, 5)),
        record(dec!(300), "Moradia", date(2024, 10, 5)),
    ];

    let today = date(2024, 12, 31);
    assert!(generate(InsightTier::Basic, &increase, today)
        .insights
        .contains(&"📈 Seus gastos aumentaram 20.0% em relação ao mês anterior.".to_string()));
    assert!(generate(InsightTier::Basic, &decrease, today)
        .insights
        .contains(&"📉 Seus gastos diminuíram 25.0% em relação ao mês anterior.".to_string()));
    assert!(generate(InsightTier::Basic, &stable, today)
        .insights
        .contains(&"➖ Seus gastos se mantiveram estáveis em relação ao mês anterior.".to_string()));
}

#[test]
fn test_basic_single_month_has_no_trend() {
    let analysis = generate(InsightTier::Basic, &week_of_spending(), date(2024, 1, 16));
    assert!(!analysis.insights.iter().any(|i| i.contains("mês anterior")));
}

#[test]
fn test_basic_small_expenses_need_three() {
    let mut expenses = vec![
        record(dec!(5), "Alimentação", date(2024, 1, 2)),
        record(dec!(7.50), "Lazer", date(2024, 1, 3)),
        record(dec!(100), "Moradia", date(2024, 1, 4)),
    ];
    let today = date(2024, 1, 31);
    assert!(!generate(InsightTier::Basic, &expenses, today)
        .suggestions
        .iter()
        .any(|s| s.starts_with("🧮")));

    expenses.push(record(dec!(19.99), "Lazer", date(2024, 1, 5)));
    // Exactly 20 is not small.
    expenses.push(record(dec!(20), "Lazer", date(2024, 1, 6)));

    let analysis = generate(InsightTier::Basic, &expenses, today);
    assert_eq!(
        analysis.suggestions[1],
        "🧮 Seus pequenos gastos somam R$ 32.49. Considere usar a regra dos R$ 10 antes de comprar."
    );
}

// ============================================================================
// Detailed tier
// ============================================================================

#[test]
fn test_detailed_empty_fallback() {
    let analysis = generate(InsightTier::Detailed, &[], date(2024, 1, 1));

    assert_eq!(analysis.insights, vec![detailed::EMPTY_INSIGHT]);
    assert_eq!(analysis.suggestions, vec![detailed::EMPTY_SUGGESTION]);
}

#[test]
fn test_detailed_full_output() {
    let analysis = generate(InsightTier::Detailed, &week_of_spending(), date(2024, 1, 16));

    assert_eq!(
        analysis.insights,
        vec![
            "💳 Seu gasto médio diário é de R$ 33.33.",
            "📅 Você gasta mais frequentemente às Domingos (1 transações).",
            "⚡ Na última semana você gastou R$ 1000.00 em 5 transações.",
        ]
    );
    assert_eq!(
        analysis.suggestions,
        vec![
            "🎯 Aplique a regra 50-30-20: R$ 500.00 para necessidades, R$ 300.00 para desejos e R$ 200.00 para poupança.",
            "🛡️ Monte uma reserva de emergência de R$ 6000.00 (6 meses de gastos).",
            "📈 Se economizar 10% dos gastos (R$ 100.00), pode investir e ter R$ 1320.00 em 1 ano.",
            "🍽️ Para alimentação: planeje refeições semanais e compre com lista. Economia estimada: R$ 60.00.",
            "🚗 Para transporte: considere carona solidária ou transporte público. Economia estimada: R$ 60.00.",
            "💰 Para Moradia: compare preços e procure promoções. Economia estimada: R$ 20.00.",
            "🏖️ Você gasta R$ 300.00 nos fins de semana. Planeje atividades mais econômicas.",
        ]
    );
}

#[test]
fn test_detailed_busiest_weekday() {
    // Two Mondays and one Friday.
    let expenses = vec![
        record(dec!(10), "Lazer", date(2024, 1, 1)),
        record(dec!(10), "Lazer", date(2024, 1, 8)),
        record(dec!(10), "Lazer", date(2024, 1, 5)),
    ];

    let analysis = generate(InsightTier::Detailed, &expenses, date(2024, 3, 1));

    assert_eq!(
        analysis.insights[1],
        "📅 Você gasta mais frequentemente às Segundas (2 transações)."
    );
}

#[test]
fn test_detailed_outliers() {
    let expenses = vec![
        record(dec!(10), "Lazer", date(2024, 1, 1)),
        record(dec!(10), "Lazer", date(2024, 1, 2)),
        record(dec!(10), "Lazer", date(2024, 1, 3)),
        record(dec!(100), "Moradia", date(2024, 1, 4)),
    ];

    let analysis = generate(InsightTier::Detailed, &expenses, date(2024, 3, 1));

    assert!(analysis
        .insights
        .contains(&"💸 Você tem 1 gastos acima da média que representam R$ 100.00.".to_string()));
}

#[test]
fn test_detailed_category_diversity() {
    let today = date(2024, 3, 1);
    let concentrated = vec![record(dec!(10), "Lazer", date(2024, 1, 1))];
    let diversified: Vec<ExpenseRecord> = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|c| record(dec!(10), c, date(2024, 1, 1)))
        .collect();

    assert!(generate(InsightTier::Detailed, &concentrated, today)
        .insights
        .iter()
        .any(|i| i.contains("concentrados em apenas 1 categoria(s)")));
    assert!(generate(InsightTier::Detailed, &diversified, today)
        .insights
        .iter()
        .any(|i| i.contains("diversificação com 5 categorias")));

    let middle = generate(InsightTier::Detailed, &week_of_spending(), today);
    assert!(!middle.insights.iter().any(|i| i.starts_with("📋") || i.starts_with("🎨")));
}

#[test]
fn test_detailed_recent_window() {
    let expenses = vec![
        record(dec!(10), "Lazer", date(2024, 1, 24)),
        record(dec!(20), "Lazer", date(2024, 1, 23)),
        record(dec!(40), "Lazer", date(2024, 2, 5)),
    ];

    let analysis = generate(InsightTier::Detailed, &expenses, date(2024, 1, 31));

    assert!(analysis
        .insights
        .contains(&"⚡ Na última semana você gastou R$ 50.00 em 2 transações.".to_string()));
}

#[test]
fn test_detailed_no_weekend_suggestion_on_weekdays() {
    let expenses = vec![record(dec!(10), "Lazer", date(2024, 1, 10))];

    let analysis = generate(InsightTier::Detailed, &expenses, date(2024, 3, 1));

    assert!(!analysis.suggestions.iter().any(|s| s.starts_with("🏖️")));
}

#[test]
fn test_generation_is_deterministic() {
    let expenses = week_of_spending();
    let today = date(2024, 1, 16);

    for tier in [InsightTier::Basic, InsightTier::Detailed] {
        assert_eq!(generate(tier, &expenses, today), generate(tier, &expenses, today));
    }
}

#[test]
fn test_extreme_amounts_do_not_overflow() {
    let today = date(2024, 1, 16);
    let halves = vec![record(Decimal::MAX / dec!(2), "Moradia", date(2024, 1, 13))];
    let maxed = vec![
        record(Decimal::MAX, "Moradia", date(2023, 12, 1)),
        record(Decimal::MAX, "Lazer", date(2024, 1, 13)),
        record(dec!(0.01), "Lazer", date(2024, 1, 14)),
    ];

    for expenses in [&halves, &maxed] {
        for tier in [InsightTier::Basic, InsightTier::Detailed] {
            let analysis = generate(tier, expenses, today);
            assert!(!analysis.insights.is_empty());
            assert!(!analysis.suggestions.is_empty());
        }
    }
}

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(dec!(40)), "40.0");
    assert_eq!(format_percent(dec!(33.333)), "33.3");
    assert_eq!(format_percent(dec!(12.25)), "12.3");
}

// ============================================================================
// Service and coordinator
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_service_waits_for_tier_delay() {
    let service = InsightService::default();
    let expenses = week_of_spending();
    let summary = SummaryService::summarize(&expenses);
    let today = date(2024, 1, 16);

    let start = tokio::time::Instant::now();
    let basic = service.analyze(&expenses, &summary, today).await;
    assert!(start.elapsed() >= Duration::from_millis(1500));
    assert_eq!(basic, service.generate(InsightTier::Basic, &expenses, &summary, today));

    let start = tokio::time::Instant::now();
    service.analyze_more(&expenses, &summary, today).await;
    assert!(start.elapsed() >= Duration::from_millis(2000));
}

#[tokio::test(start_paused = true)]
async fn test_coordinator_publishes_result() {
    let coordinator = InsightCoordinator::new(service(1500, 2000));
    let mut receiver = coordinator.subscribe();
    let expenses = week_of_spending();
    let summary = SummaryService::summarize(&expenses);

    let handle = coordinator.request(InsightTier::Basic, expenses, summary, date(2024, 1, 16));
    assert!(coordinator.current().analysis.loading);

    let snapshot = receiver
        .wait_for(|s| s.sequence == 1)
        .await
        .unwrap()
        .clone();
    assert!(handle.await.unwrap());

    assert_eq!(snapshot.tier, Some(InsightTier::Basic));
    assert!(!snapshot.analysis.loading);
    assert_eq!(snapshot.analysis.insights.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_later_request_wins_when_earlier_resolves_last() {
    let coordinator = InsightCoordinator::new(service(2000, 100));
    let stale = week_of_spending();
    let fresh = vec![record(dec!(42), "Lazer", date(2024, 1, 15))];

    let first = coordinator.request(
        InsightTier::Basic,
        stale.clone(),
        SummaryService::summarize(&stale),
        date(2024, 1, 16),
    );
    let second = coordinator.request(
        InsightTier::Detailed,
        fresh.clone(),
        SummaryService::summarize(&fresh),
        date(2024, 1, 16),
    );

    assert!(second.await.unwrap());
    assert!(!first.await.unwrap());

    let snapshot = coordinator.current();
    assert_eq!(snapshot.sequence, 2);
    assert_eq!(snapshot.tier, Some(InsightTier::Detailed));
    assert!(snapshot.analysis.insights[0].contains("R$ 1.40"));
}

#[tokio::test(start_paused = true)]
async fn test_invalidate_discards_pending_result() {
    let coordinator = InsightCoordinator::new(service(1500, 2000));
    let expenses = week_of_spending();
    let summary = SummaryService::summarize(&expenses);

    let pending = coordinator.request(InsightTier::Basic, expenses, summary, date(2024, 1, 16));
    assert_eq!(coordinator.invalidate(), 2);

    assert!(!pending.await.unwrap());
    let snapshot = coordinator.current();
    assert_eq!(snapshot.sequence, 0);
    assert!(snapshot.analysis.loading);
}

#[tokio::test(start_paused = true)]
async fn test_refresh_uses_clock() {
    fn fixed() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()
    }

    let coordinator = InsightCoordinator::new(service(10, 10)).with_clock(fixed);
    let expenses = week_of_spending();
    let summary = SummaryService::summarize(&expenses);

    assert!(coordinator
        .refresh(InsightTier::Detailed, expenses.clone(), summary.clone())
        .await
        .unwrap());

    let expected = InsightService::default().generate(InsightTier::Detailed, &expenses, &summary, fixed());
    assert_eq!(coordinator.current().analysis, expected);
}

#[tokio::test(start_paused = true)]
async fn test_earlier_request_resolving_first_is_discarded() {
    let coordinator = InsightCoordinator::new(service(100, 2000));
    let expenses = week_of_spending();
    let summary = SummaryService::summarize(&expenses);
    let today = date(2024, 1, 16);

    let first = coordinator.request(InsightTier::Basic, expenses.clone(), summary.clone(), today);
    let second = coordinator.request(InsightTier::Detailed, expenses, summary, today);

    assert!(!first.await.unwrap());
    let pending = coordinator.current();
    assert_eq!(pending.sequence, 0);
    assert!(pending.analysis.loading);

    assert!(second.await.unwrap());
    let snapshot = coordinator.current();
    assert_eq!(snapshot.sequence, 2);
    assert_eq!(snapshot.tier, Some(InsightTier::Detailed));
    assert!(!snapshot.analysis.loading);
    assert_eq!(coordinator.latest_sequence(), 2);
}
