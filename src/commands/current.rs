use anyhow::Result;
use colored::Colorize;
use node_shift::VersionManager;

pub fn execute(manager: &VersionManager) -> Result<()> {
    match manager.current() {
        Some(version) => println!("{}", version.green()),
        None => println!("No active Node.js version"),
    }

    Ok(())
}
