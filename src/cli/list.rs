//! List command: print the registry without prompting.

use anyhow::{Context, Result};

use cogsamples::registry::{registry, Registry};

pub(crate) fn cmd_list() -> Result<()> {
    let registry = registry().with_context(|| "Failed to load sample registry")?;
    println!("{}", render_listing(registry));
    Ok(())
}

/// One header line per group followed by its indented examples.
fn render_listing(registry: &Registry) -> String {
    let mut lines = Vec::new();
    for (index, group) in registry.groups().iter().enumerate() {
        let suffix = if group.requires_config() {
            " (needs --value)"
        } else {
            ""
        };
        lines.push(format!("{}: {}{}", index, group.name, suffix));
        for example in group.examples() {
            lines.push(format!("    {}: {}", example.index, example.description));
        }
    }
    lines.join("\n")
}
