//! Sample expenses for the demo.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendlens_core::expense::NewExpense;

/// Description, amount in cents, category, year, month, day.
const SAMPLE_EXPENSES: [(&str, i64, &str, i32, u32, u32); 5] = [
    ("Mercado", 15075, "Alimentação", 2023, 7, 15),
    ("Gasolina", 8000, "Transporte", 2023, 7, 16),
    ("Aluguel", 120_000, "Moradia", 2023, 7, 5),
    ("Cinema", 4580, "Lazer", 2023, 7, 20),
    ("Farmácia", 6530, "Saúde", 2023, 7, 22),
];

/// Builds the sample expenses. Entries with an impossible date are skipped.
pub fn sample_expenses() -> Vec<NewExpense> {
    SAMPLE_EXPENSES
        .iter()
        .filter_map(|&(description, cents, category, year, month, day)| {
            Some(NewExpense {
                description: description.to_string(),
                amount: Decimal::new(cents, 2),
                category: category.to_string(),
                date: NaiveDate::from_ymd_opt(year, month, day)?,
            })
        })
        .collect()
}
