//! Interactive run command.

use anyhow::{Context, Result};

use cogsamples::config::Config;
use cogsamples::console::Terminal;
use cogsamples::driver::{Driver, DriverOptions};
use cogsamples::registry::registry;

/// Load the registry and hand the terminal to the driver until the user quits.
pub(crate) fn cmd_run(config: &Config, fail_fast: bool) -> Result<()> {
    let registry = registry().with_context(|| "Failed to load sample registry")?;

    let options = DriverOptions {
        fail_fast,
        ..DriverOptions::from_config(config)
    };

    println!("Cognitive Services Samples");
    println!("Pick a sample group, then an example. Press 'q' after a run to stop.");
    println!();

    let mut driver = Driver::new(registry, Terminal::new(), options);
    let summary = driver.run()?;

    println!();
    println!(
        "Ran {} sample(s): {} succeeded, {} failed.",
        summary.attempts, summary.succeeded, summary.failed
    );
    println!("Goodbye!");
    Ok(())
}
