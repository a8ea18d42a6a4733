//! Runs the shop's stock through a number of simulated days and prints a
//! snapshot of every day.

pub mod config;
pub mod fixture;
pub mod report;

use std::io::Write;

use anyhow::Context;
use gilded_rose_inventory::{GildedRose, Item};

pub use config::{ConfigError, OutputFormat, SimulatorConfig};

use crate::report::{DaySnapshot, write_snapshot};

/// Print day 0 (the opening stock) and then the state after each of
/// `config.days` updates.
pub fn run<W: Write>(
    config: &SimulatorConfig,
    items: Vec<Item>,
    out: &mut W,
) -> anyhow::Result<GildedRose> {
    let mut shop = GildedRose::new(items);

    tracing::info!(days = config.days, items = shop.items().len(), "starting simulation");

    for day in 0..=config.days {
        if day > 0 {
            shop.update_quality();
        }
        write_snapshot(
            out,
            config.output,
            &DaySnapshot {
                day,
                items: shop.items(),
            },
        )
        .with_context(|| format!("failed to write snapshot for day {day}"))?;
    }

    out.flush().context("failed to flush output")?;
    tracing::info!(days = config.days, "simulation finished");
    Ok(shop)
}
