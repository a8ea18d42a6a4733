use serde::Serialize;

use crate::category::{Category, CategoryCatalog};

/// An inventory item.
///
/// `sell_in` and `quality` are public so callers can inspect them after each
/// simulated day. The name and category are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    name: String,
    /// Days left before the sell-by date. Negative once expired.
    pub sell_in: i32,
    pub quality: i32,
    category: Category,
}

impl Item {
    /// Create an item, classifying it with [`CategoryCatalog::standard`].
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self::with_catalog(name, sell_in, quality, &CategoryCatalog::standard())
    }

    /// Create an item, classifying it with a caller-provided catalog.
    pub fn with_catalog(
        name: impl Into<String>,
        sell_in: i32,
        quality: i32,
        catalog: &CategoryCatalog,
    ) -> Self {
        let name = name.into();
        let category = catalog.classify(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
