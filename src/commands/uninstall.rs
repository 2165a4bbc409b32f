use anyhow::Result;
use colored::Colorize;
use node_shift::VersionManager;

pub fn execute(manager: &mut VersionManager, version: &str) -> Result<()> {
    manager.uninstall(version)?;

    println!("Successfully removed Node.js {}", version.trim_start_matches('v').green());

    Ok(())
}
