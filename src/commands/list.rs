use anyhow::Result;
use colored::Colorize;
use node_shift::VersionManager;

pub fn execute(manager: &mut VersionManager) -> Result<()> {
    let versions = manager.list()?;

    println!("Installed Node.js versions:");

    if versions.is_empty() {
        println!("  No versions installed");
        return Ok(());
    }

    for version in &versions {
        if manager.current() == Some(version.as_str()) {
            println!("* {} (current)", version.green());
        } else {
            println!("  {}", version);
        }
    }

    Ok(())
}
