//! Detailed-tier analysis.

use chrono::{Datelike, Weekday};
use rust_decimal::Decimal;

use super::tips::tip_message;
use super::types::{AiAnalysis, InsightContext};
use crate::expense::ExpenseRecord;
use crate::ranking::RankingService;
use crate::summary::ExpenseSummary;

/// Shown instead of insights when there is no data.
pub const EMPTY_INSIGHT: &str = "📊 Adicione mais despesas para uma análise mais profunda!";

/// Shown instead of suggestions when there is no data.
pub const EMPTY_SUGGESTION: &str =
    "🎯 Use o método 50-30-20: 50% necessidades, 30% desejos, 20% poupança!";

/// Fixed month length for the daily average.
const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// An expense is an outlier above this multiple of the mean.
const OUTLIER_FACTOR: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

const CONCENTRATED_MAX: usize = 2;
const DIVERSIFIED_MIN: usize = 5;

/// Look-back window for recent activity, in days.
const RECENT_WINDOW_DAYS: i64 = 7;

const NEEDS_SHARE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
const WANTS_SHARE: Decimal = Decimal::from_parts(3, 0, 0, false, 1);
const SAVINGS_SHARE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);
const EMERGENCY_MONTHS: Decimal = Decimal::from_parts(6, 0, 0, false, 0);
const SAVINGS_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const INVESTMENT_GROWTH: Decimal = Decimal::from_parts(11, 0, 0, false, 1);

/// Categories that receive a dedicated tip.
const TIPPED_CATEGORIES: usize = 3;

/// Weekday names indexed from Sunday.
const WEEKDAY_NAMES: [&str; 7] = [
    "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado",
];

/// Generates the detailed analysis.
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
        "💳 Seu gasto médio diário é de {}.",
        ctx.money(summary.total / DAYS_PER_MONTH)
    )];

    if let Some((day, count)) = busiest_weekday(expenses) {
        insights.push(format!(
            "📅 Você gasta mais frequentemente às {}s ({count} transações).",
            WEEKDAY_NAMES[day]
        ));
    }

    let threshold = (summary.total / Decimal::from(expenses.len())).saturating_mul(OUTLIER_FACTOR);
    let (outliers, outlier_total) = count_and_sum(expenses.iter().filter(|e| e.amount > threshold));
    if outliers > 0 {
        insights.push(format!(
            "💸 Você tem {outliers} gastos acima da média que representam {}.",
            ctx.money(outlier_total)
        ));
    }

    let categories = summary.by_category.len();
    if categories <= CONCENTRATED_MAX {
        insights.push(format!(
            "📋 Seus gastos estão concentrados em apenas {categories} categoria(s). \
             Considere categorizar melhor."
        ));
    } else if categories >= DIVERSIFIED_MIN {
        insights.push(format!(
            "🎨 Você tem uma boa diversificação com {categories} categorias diferentes de gastos."
        ));
    }

    // Future-dated records have a negative age and count as recent.
    let (recent, recent_total) = count_and_sum(
        expenses
            .iter()
            .filter(|e| (ctx.today - e.date).num_days() <= RECENT_WINDOW_DAYS),
    );
    if recent > 0 {
        insights.push(format!(
            "⚡ Na última semana você gastou {} em {recent} transações.",
            ctx.money(recent_total)
        ));
    }

    insights
}

fn suggestions(
    expenses: &[ExpenseRecord],
    summary: &ExpenseSummary,
    ctx: &InsightContext,
) -> Vec<String> {
    let total = summary.total;
    let savings = total * SAVINGS_RATE;

    let mut suggestions = vec![
        format!(
            "🎯 Aplique a regra 50-30-20: {} para necessidades, {} para desejos e {} para poupança.",
            ctx.money(total * NEEDS_SHARE),
            ctx.money(total * WANTS_SHARE),
            ctx.money(total * SAVINGS_SHARE)
        ),
        format!(
            "🛡️ Monte uma reserva de emergência de {} (6 meses de gastos).",
            ctx.money(total.saturating_mul(EMERGENCY_MONTHS))
        ),
        format!(
            "📈 Se economizar 10% dos gastos ({}), pode investir e ter {} em 1 ano.",
            ctx.money(savings),
            ctx.money(
                savings
                    .saturating_mul(MONTHS_PER_YEAR)
                    .saturating_mul(INVESTMENT_GROWTH)
            )
        ),
    ];

    suggestions.extend(
        RankingService::ordered(&summary.by_category)
            .into_iter()
            .take(TIPPED_CATEGORIES)
            .map(|(category, amount)| tip_message(category, amount, ctx)),
    );

    let (weekend, weekend_total) = count_and_sum(
        expenses
            .iter()
            .filter(|e| matches!(e.date.weekday(), Weekday::Sat | Weekday::Sun)),
    );
    if weekend > 0 {
        suggestions.push(format!(
            "🏖️ Você gasta {} nos fins de semana. Planeje atividades mais econômicas.",
            ctx.money(weekend_total)
        ));
    }

    suggestions
}

/// Weekday with the most records, indexed from Sunday. Ties go to the
/// earliest day.
fn busiest_weekday(expenses: &[ExpenseRecord]) -> Option<(usize, usize)> {
    let mut counts = [0usize; 7];
    for expense in expenses {
        counts[expense.date.weekday().num_days_from_sunday() as usize] += 1;
    }

    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .fold(None, |best, (day, &count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((day, count)),
        })
}

fn count_and_sum<'a>(records: impl Iterator<Item = &'a ExpenseRecord>) -> (usize, Decimal) {
    records.fold((0, Decimal::ZERO), |(count, sum), e| {
        (count + 1, sum.saturating_add(e.amount))
    })
}
