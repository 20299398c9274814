//! Category-specific savings tips.

use rust_decimal::Decimal;

use super::types::InsightContext;

/// A savings tip for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTip {
    /// Advice text, rendered before the estimated saving.
    pub advice: &'static str,
    /// Fraction of the category total the advice is expected to save.
    pub savings_rate: Decimal,
}

/// Tips keyed by normalized category name.
const CATEGORY_TIPS: [(&str, CategoryTip); 3] = [
    (
        "alimentacao",
        CategoryTip {
            advice: "🍽️ Para alimentação: planeje refeições semanais e compre com lista.",
            savings_rate: Decimal::from_parts(15, 0, 0, false, 2),
        },
    ),
    (
        "transporte",
        CategoryTip {
            advice: "🚗 Para transporte: considere carona solidária ou transporte público.",
            savings_rate: Decimal::from_parts(20, 0, 0, false, 2),
        },
    ),
    (
        "lazer",
        CategoryTip {
            advice: "🎮 Para lazer: procure atividades gratuitas como parques e eventos culturais.",
            savings_rate: Decimal::from_parts(25, 0, 0, false, 2),
        },
    ),
];

/// Rate applied to categories without a dedicated tip.
const DEFAULT_SAVINGS_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Lower-cases a category name and folds Portuguese accents.
#[must_use]
pub fn normalize_category(name: &str) -> String {
    name.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Looks up the dedicated tip for a category, if there is one.
#[must_use]
pub fn tip_for(category: &str) -> Option<&'static CategoryTip> {
    let key = normalize_category(category);
    CATEGORY_TIPS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, tip)| tip)
}

/// Renders the savings suggestion for a category and its total.
#[must_use]
pub fn tip_message(category: &str, amount: Decimal, ctx: &InsightContext) -> String {
    match tip_for(category) {
        Some(tip) => format!(
            "{} Economia estimada: {}.",
            tip.advice,
            ctx.money(amount * tip.savings_rate)
        ),
        None => format!(
            "💰 Para {category}: compare preços e procure promoções. Economia estimada: {}.",
            ctx.money(amount * DEFAULT_SAVINGS_RATE)
        ),
    }
}
