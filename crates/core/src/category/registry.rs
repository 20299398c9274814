//! Static category registry.

use serde::{Deserialize, Serialize};
use spendlens_shared::types::CategoryId;
use uuid::Uuid;

/// Color used for categories missing from the registry.
pub const FALLBACK_COLOR: &str = "#6B7280";

/// Built-in categories, in display order.
const DEFAULT_CATEGORIES: [(&str, &str); 7] = [
    ("Alimentação", "#EF4444"),
    ("Transporte", "#F59E0B"),
    ("Moradia", "#10B981"),
    ("Lazer", "#3B82F6"),
    ("Saúde", "#8B5CF6"),
    ("Educação", "#EC4899"),
    ("Outros", "#6B7280"),
];

/// A category definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Category ID.
    pub id: CategoryId,
    /// Unique display name; the lookup key.
    pub name: String,
    /// Display color token.
    pub color: String,
}

/// Immutable set of known categories.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<CategoryDefinition>,
}

impl CategoryRegistry {
    /// Builds a registry from an explicit list of definitions.
    #[must_use]
    pub fn new(categories: Vec<CategoryDefinition>) -> Self {
        Self { categories }
    }

    /// All definitions in display order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    /// Looks up a definition by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Returns the color for a category, or [`FALLBACK_COLOR`] when unknown.
    #[must_use]
    pub fn color_for(&self, name: &str) -> &str {
        self.get(name).map_or(FALLBACK_COLOR, |c| c.color.as_str())
    }

    /// Returns true if the category is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .zip(1u128..)
            .map(|(&(name, color), n)| CategoryDefinition {
                id: CategoryId::from_uuid(Uuid::from_u128(n)),
                name: name.to_string(),
                color: color.to_string(),
            })
            .collect();

        Self { categories }
    }
}
