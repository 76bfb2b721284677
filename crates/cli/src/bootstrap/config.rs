use checkip_domain::{CliOverrides, Config};

/// Loads the file (if any), applies overrides and refuses to start with an
/// unusable configuration.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
