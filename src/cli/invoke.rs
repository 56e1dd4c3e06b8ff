//! One-shot invoke command.

use anyhow::{anyhow, Context, Result};

use cogsamples::config::Config;
use cogsamples::driver::{invoke, parse_config_value, resolve_example, resolve_group};
use cogsamples::registry::{registry, Arguments, Example, Registry, SampleGroup};

/// Resolve `group`/`example` with the interactive menu rules and run it once.
pub(crate) fn cmd_invoke(
    config: &Config,
    group: &str,
    example: &str,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let registry = registry().with_context(|| "Failed to load sample registry")?;
    let key = key.or_else(|| config.subscription_key.clone());

    let (group, example, args) = prepare(registry, group, example, key, value)?;
    invoke(group, example, &args)?;
    Ok(())
}

/// Everything `cmd_invoke` checks before calling the sample.
fn prepare<'r>(
    registry: &'r Registry,
    group: &str,
    example: &str,
    key: Option<String>,
    value: Option<String>,
) -> Result<(&'r SampleGroup, &'r Example, Arguments)> {
    let group = resolve_group(registry, group).with_context(|| {
        format!(
            "Unknown sample group. Available: {}",
            registry.group_names().join(", ")
        )
    })?;
    let example = resolve_example(group, example)
        .with_context(|| format!("Group '{}' has examples 0..{}", group.name, group.len()))?;

    let key = key.filter(|k| !k.is_empty()).ok_or_else(|| {
        anyhow!("No subscription key. Pass --key or set COGSAMPLES_SUBSCRIPTION_KEY")
    })?;
    let mut args = Arguments::new(key);

    match (group.requires_config(), value) {
        (true, Some(raw)) => args = args.with_config(parse_config_value(&raw)?),
        (true, None) => {
            return Err(anyhow!(
                "Group '{}' needs a custom configuration id (--value)",
                group.name
            ))
        }
        (false, Some(_)) => {
            return Err(anyhow!(
                "Group '{}' does not take a custom configuration id",
                group.name
            ))
        }
        (false, None) => {}
    }

    Ok((group, example, args))
}
