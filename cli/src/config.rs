use anyhow::Context;
use pairmatch_core::GameConfig;
use std::fs;
use std::path::Path;

/// Applies the TOML file at `path`, if any, on top of `preset`.
pub(crate) fn load(preset: GameConfig, path: Option<&Path>) -> anyhow::Result<GameConfig> {
    let Some(path) = path else {
        return Ok(preset);
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    let config = apply_overrides(preset, &text)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    log::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

fn apply_overrides(preset: GameConfig, text: &str) -> anyhow::Result<GameConfig> {
    let overrides: toml::Table = toml::from_str(text)?;
    let toml::Value::Table(mut base) = toml::Value::try_from(preset)? else {
        anyhow::bail!("Preset did not serialize to a table");
    };
    overlay(&mut base, overrides);

    let config: GameConfig = toml::Value::Table(base).try_into()?;
    config.validate()?;
    Ok(config)
}

fn overlay(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(inner)), toml::Value::Table(value)) => overlay(inner, value),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
