use crate::aging::age_one_day;
use crate::item::Item;

/// Advance every item by one simulated day, in place.
///
/// Items are independent of each other; the order of the slice does not
/// affect the result.
pub fn update_quality(items: &mut [Item]) {
    tracing::debug!(items = items.len(), "updating quality");
    for item in items.iter_mut() {
        age_one_day(item);
    }
}

/// The shop: owns an inventory and ages it one day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Advance the whole inventory by one day.
    pub fn update_quality(&mut self) {
        update_quality(&mut self.items);
    }

    /// Advance the whole inventory by `days` days.
    pub fn advance(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl From<Vec<Item>> for GildedRose {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
