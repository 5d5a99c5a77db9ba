use super::config::{default_config_path, StakeProofConfig};
use std::path::PathBuf;

/// Write the default configuration file
pub fn execute(path: Option<String>, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = path.map(PathBuf::from).unwrap_or_else(default_config_path);

    if path.exists() && !force {
        return Err(format!(
            "Config file '{}' already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }

    StakeProofConfig::create_default(&path)?;
    println!("Created: {}", path.display());
    Ok(())
}
