use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use gilded_rose_core::{DomainError, DomainResult, ValueObject};

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Aging behaviour of an item, fixed for the item's lifetime.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Loses quality every day, twice as fast once expired.
    #[default]
    Regular,
    /// Gains quality every day, twice as fast once expired.
    AgedBrie,
    /// Gains quality faster as the event nears, worthless afterwards.
    BackstagePass,
    /// Never ages.
    Legendary,
}

impl ValueObject for Category {}

impl Category {
    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Legendary)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Category::Regular => "regular",
            Category::AgedBrie => "aged_brie",
            Category::BackstagePass => "backstage_pass",
            Category::Legendary => "legendary",
        };
        f.write_str(s)
    }
}

/// Name → category lookup, consulted once when an item is constructed.
///
/// Matching is exact and case-sensitive. Names that are not registered are
/// [`Category::Regular`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCatalog {
    entries: HashMap<String, Category>,
}

impl CategoryCatalog {
    /// A catalog with no special names; every item is regular.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shop's built-in special items.
    pub fn standard() -> Self {
        let mut entries = HashMap::new();
        entries.insert(AGED_BRIE.to_string(), Category::AgedBrie);
        entries.insert(BACKSTAGE_PASSES.to_string(), Category::BackstagePass);
        entries.insert(SULFURAS.to_string(), Category::Legendary);
        Self { entries }
    }

    /// Map `name` to `category`.
    ///
    /// Registering an identical mapping twice is a no-op.
    pub fn register(&mut self, name: impl Into<String>, category: Category) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        match self.entries.get(&name) {
            Some(existing) if *existing == category => Ok(()),
            Some(existing) => Err(DomainError::conflict(format!(
                "`{name}` is already registered as {existing}"
            ))),
            None => {
                self.entries.insert(name, category);
                Ok(())
            }
        }
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, category: Category) -> DomainResult<Self> {
        self.register(name, category)?;
        Ok(self)
    }

    pub fn classify(&self, name: &str) -> Category {
        self.entries.get(name).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
