//! The daily aging rule.
//!
//! One simulated day runs in two passes per item:
//! 1. an adjustment chosen from the category and the sell-in value *before*
//!    the day ticks over,
//! 2. the sell-in decrement, followed by an extra adjustment if the item is
//!    now past its sell-by date.
//!
//! The second pass fires on the same day the item expires, so a regular item
//! at `sell_in == 0` loses two points in one update.

use crate::category::Category;
use crate::item::Item;

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;
/// Quality of legendary items. They are exempt from [`MAX_QUALITY`].
pub const LEGENDARY_QUALITY: i32 = 80;

/// A single bounded quality change.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Adjustment {
    Raise(i32),
    Lower(i32),
    /// Drop to [`MIN_QUALITY`].
    Collapse,
}

impl Adjustment {
    /// Apply to `quality`, stopping at the bound it moves toward.
    ///
    /// A step never pushes a value past a bound. A value that is already past
    /// the bound in the direction of travel is left alone.
    pub fn apply(self, quality: i32) -> i32 {
        match self {
            Adjustment::Raise(by) => {
                if quality >= MAX_QUALITY {
                    quality
                } else {
                    quality.saturating_add(by).min(MAX_QUALITY)
                }
            }
            Adjustment::Lower(by) => {
                if quality <= MIN_QUALITY {
                    quality
                } else {
                    quality.saturating_sub(by).max(MIN_QUALITY)
                }
            }
            Adjustment::Collapse => MIN_QUALITY,
        }
    }
}

/// Adjustment for the day, based on the pre-decrement `sell_in`.
///
/// `None` for categories that never age.
pub fn daily_adjustment(category: Category, sell_in: i32) -> Option<Adjustment> {
    match category {
        Category::Legendary => None,
        Category::Regular => Some(Adjustment::Lower(1)),
        Category::AgedBrie => Some(Adjustment::Raise(1)),
        Category::BackstagePass => Some(match sell_in {
            i32::MIN..=-1 => Adjustment::Collapse,
            0..=5 => Adjustment::Raise(3),
            6..=10 => Adjustment::Raise(2),
            _ => Adjustment::Raise(1),
        }),
    }
}

/// Extra adjustment once the item is past its sell-by date.
pub fn expiry_adjustment(category: Category) -> Option<Adjustment> {
    match category {
        Category::Legendary => None,
        Category::Regular => Some(Adjustment::Lower(1)),
        Category::AgedBrie => Some(Adjustment::Raise(1)),
        Category::BackstagePass => Some(Adjustment::Collapse),
    }
}

/// Advance a single item by one day.
pub fn age_one_day(item: &mut Item) {
    let category = item.category();
    let Some(daily) = daily_adjustment(category, item.sell_in) else {
        return;
    };

    let (sell_in_before, quality_before) = (item.sell_in, item.quality);

    item.quality = daily.apply(item.quality);
    item.sell_in = item.sell_in.saturating_sub(1);

    if item.is_expired() {
        if let Some(extra) = expiry_adjustment(category) {
            item.quality = extra.apply(item.quality);
        }
    }

    tracing::trace!(
        item = item.name(),
        %category,
        sell_in_before,
        quality_before,
        sell_in = item.sell_in,
        quality = item.quality,
        "item aged"
    );
}
