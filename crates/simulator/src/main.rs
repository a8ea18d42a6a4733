use anyhow::Context;

use gilded_rose_simulator::{SimulatorConfig, fixture, run};

fn main() -> anyhow::Result<()> {
    let config = SimulatorConfig::from_env().context("invalid simulator configuration")?;

    gilded_rose_observability::init_with(config.log_format);
    config.warn_defaults();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, fixture::standard_stock(), &mut out)?;

    Ok(())
}
