//! Basic-tier analysis.

use rust_decimal::Decimal;

use super::types::{format_percent, AiAnalysis, InsightContext};
use crate::expense::ExpenseRecord;
use crate::ranking::RankingService;
use crate::summary::ExpenseSummary;
use crate::trend::{TrendDirection, TrendService};

/// Shown instead of insights when there is no data.
pub const EMPTY_INSIGHT: &str =
    "Comece adicionando suas despesas para receber análises personalizadas!";

/// Shown instead of suggestions when there is no data.
pub const EMPTY_SUGGESTION: &str =
    "🚀 Comece registrando seus gastos diários para receber dicas personalizadas!";

/// Expenses strictly below this amount count as small.
const SMALL_EXPENSE_LIMIT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Small expenses are only called out from this many on.
const SMALL_EXPENSE_MIN_COUNT: usize = 3;

/// Threshold quoted by the small-expense suggestion.
const SMALL_EXPENSE_RULE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

const BUDGET_FACTOR: Decimal = Decimal::from_parts(9, 0, 0, false, 1);
const SAVINGS_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Generates the basic analysis.
#[must_use]
pub fn analyze(
    expenses: &[ExpenseRecord],
    summary: &ExpenseSummary,
    ctx: &InsightContext,
) -> AiAnalysis {
    if expenses.is_empty() {
        return AiAnalysis {
            insights: vec![EMPTY_INSIGHT.to_string()],
            suggestions: vec![EMPTY_SUGGESTION.to_string()],
            loading: false,
        };
    }

    AiAnalysis {
        insights: insights(expenses, summary, ctx),
        suggestions: suggestions(expenses, summary, ctx),
        loading: false,
    }
}

fn insights(
    expenses: &[ExpenseRecord],
    summary: &ExpenseSummary,
    ctx: &InsightContext,
) -> Vec<String> {
    let mut insights = vec![format!(
        "💰 Você gastou um total de {} no período analisado.",
        ctx.money(summary.total)
    )];

    let ordered = RankingService::ordered(&summary.by_category);

    if let Some(&(category, amount)) = ordered.first() {
        let percentage = RankingService::percentage_of(amount, summary.total);
        insights.push(format!(
            "🎯 Sua maior categoria de gasto é \"{category}\" com {} ({}% do total).",
            ctx.money(amount),
            format_percent(percentage)
        ));
    }

    if let Some(trend) = TrendService::trend(&summary.by_month) {
        insights.push(match trend.direction {
            TrendDirection::Increase => format!(
                "📈 Seus gastos aumentaram {}% em relação ao mês anterior.",
                format_percent(trend.percent_change)
            ),
            TrendDirection::Decrease => format!(
                "📉 Seus gastos diminuíram {}% em relação ao mês anterior.",
                format_percent(trend.percent_change.abs())
            ),
            TrendDirection::Stable => {
                "➖ Seus gastos se mantiveram estáveis em relação ao mês anterior.".to_string()
            }
        });
    }

    let average = summary.total / Decimal::from(expenses.len());
    insights.push(format!(
        "🧾 Seu gasto médio por despesa é de {}.",
        ctx.money(average)
    ));

    insights
}

fn suggestions(
    expenses: &[ExpenseRecord],
    summary: &ExpenseSummary,
    ctx: &InsightContext,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if let Some(&(category, _)) = RankingService::ordered(&summary.by_category).first() {
        suggestions.push(format!(
            "💡 Considere definir um limite mensal para \"{category}\" e acompanhe semanalmente."
        ));
    }

    let small: Vec<&ExpenseRecord> = expenses
        .iter()
        .filter(|e| e.amount < SMALL_EXPENSE_LIMIT)
        .collect();
    if small.len() >= SMALL_EXPENSE_MIN_COUNT {
        let small_total = small
            .iter()
            .fold(Decimal::ZERO, |sum, e| sum.saturating_add(e.amount));
        suggestions.push(format!(
            "🧮 Seus pequenos gastos somam {}. Considere usar a regra dos {} antes de comprar.",
            ctx.money(small_total),
            ctx.plain_amount(SMALL_EXPENSE_RULE)
        ));
    }

    suggestions.push(format!(
        "📊 Defina um orçamento mensal de {} para reduzir gastos em 10%.",
        ctx.money(summary.total * BUDGET_FACTOR)
    ));

    let monthly_savings = summary.total * SAVINGS_RATE;
    suggestions.push(format!(
        "🏦 Guardando 10% por mês ({}), você acumularia {} em 12 meses.",
        ctx.money(monthly_savings),
        ctx.money(monthly_savings.saturating_mul(MONTHS_PER_YEAR))
    ));

    suggestions
}
