//! Inventory aging for the Gilded Rose.
//!
//! This crate contains the business rules for how items age, implemented
//! purely as deterministic domain logic (no IO, no storage). Each call to
//! [`update_quality`] is one simulated day.

pub mod aging;
pub mod category;
pub mod gilded_rose;
pub mod item;

#[cfg(test)]
mod properties;

pub use aging::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use category::{AGED_BRIE, BACKSTAGE_PASSES, Category, CategoryCatalog, SULFURAS};
pub use gilded_rose::{GildedRose, update_quality};
pub use item::Item;
