use proptest::prelude::*;

use crate::aging::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::category::{AGED_BRIE, BACKSTAGE_PASSES, SULFURAS};
use crate::gilded_rose::{GildedRose, update_quality};
use crate::item::Item;

fn any_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(AGED_BRIE.to_string()),
        Just(BACKSTAGE_PASSES.to_string()),
        Just(SULFURAS.to_string()),
        "[A-Za-z+][A-Za-z0-9 ]{0,30}",
    ]
}

fn aged_once(name: &str, sell_in: i32, quality: i32) -> Item {
    let mut items = vec![Item::new(name, sell_in, quality)];
    update_quality(&mut items);
    items.remove(0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    /// Property: regular items lose exactly one point per day before expiry.
    #[test]
    fn regular_degrades_by_one_before_sell_by(sell_in in 1i32..1_000, quality in 1i32..=50) {
        let item = aged_once("Regular Item", sell_in, quality);
        prop_assert_eq!(item.sell_in, sell_in - 1);
        prop_assert_eq!(item.quality, quality - 1);
    }

    /// Property: a regular item at zero quality stays at zero.
    #[test]
    fn regular_quality_floor_holds(sell_in in -1_000i32..1_000) {
        let item = aged_once("Regular Item", sell_in, 0);
        prop_assert_eq!(item.quality, 0);
    }

    /// Property: brie gains one point per day before expiry, capped at 50.
    #[test]
    fn brie_improves_by_one_before_sell_by(sell_in in 1i32..1_000, quality in 0i32..50) {
        let item = aged_once(AGED_BRIE, sell_in, quality);
        prop_assert_eq!(item.quality, (quality + 1).min(MAX_QUALITY));
    }

    /// Property: brie never loses quality.
    #[test]
    fn brie_never_degrades(sell_in in -1_000i32..1_000, quality in 0i32..=50) {
        let item = aged_once(AGED_BRIE, sell_in, quality);
        prop_assert!(item.quality >= quality);
        prop_assert!(item.quality <= MAX_QUALITY);
    }

    /// Property: passes gain value while the event is still ahead.
    #[test]
    fn backstage_rises_before_event(sell_in in 1i32..1_000, quality in 0i32..50) {
        let item = aged_once(BACKSTAGE_PASSES, sell_in, quality);
        prop_assert!(item.quality > quality);
        prop_assert!(item.quality <= MAX_QUALITY);
    }

    /// Property: passes are worthless from the event day on.
    #[test]
    fn backstage_worthless_after_event(sell_in in -1_000i32..=0, quality in 0i32..=50) {
        let item = aged_once(BACKSTAGE_PASSES, sell_in, quality);
        prop_assert_eq!(item.quality, 0);
    }

    /// Property: legendary items never change, however many days pass.
    #[test]
    fn legendary_is_frozen(sell_in in -1_000i32..1_000, days in 0u32..100) {
        let mut shop = GildedRose::new(vec![Item::new(SULFURAS, sell_in, LEGENDARY_QUALITY)]);
        shop.advance(days);
        let item = &shop.items()[0];
        prop_assert_eq!(item.sell_in, sell_in);
        prop_assert_eq!(item.quality, LEGENDARY_QUALITY);
    }

    /// Property: over any number of days, non-legendary items stay in
    /// bounds, lose exactly one sell-in day per update, and keep their
    /// category.
    #[test]
    fn bounds_and_category_hold_over_time(
        name in any_name(),
        sell_in in -100i32..100,
        quality in 0i32..=50,
        days in 0u32..120,
    ) {
        let original = Item::new(name, sell_in, quality);
        prop_assume!(!original.category().is_legendary());

        let mut shop = GildedRose::new(vec![original.clone()]);
        for day in 1..=days {
            shop.update_quality();
            let item = &shop.items()[0];
            prop_assert!((MIN_QUALITY..=MAX_QUALITY).contains(&item.quality));
            prop_assert_eq!(item.sell_in, sell_in - day as i32);
            prop_assert_eq!(item.category(), original.category());
            prop_assert_eq!(item.name(), original.name());
        }
    }

    /// Property: items age independently of their position in the list.
    #[test]
    fn order_of_items_is_irrelevant(
        entries in prop::collection::vec((any_name(), -20i32..20, 0i32..=50), 1..12)
    ) {
        let forward: Vec<Item> = entries
            .iter()
            .map(|(name, sell_in, quality)| Item::new(name.clone(), *sell_in, *quality))
            .collect();
        let mut reversed = forward.clone();
        reversed.reverse();

        let mut forward = forward;
        update_quality(&mut forward);
        update_quality(&mut reversed);
        reversed.reverse();

        prop_assert_eq!(forward, reversed);
    }
}
