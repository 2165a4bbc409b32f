use anyhow::Result;
use colored::Colorize;
use node_shift::VersionManager;

pub fn execute(manager: &mut VersionManager, version: &str) -> Result<()> {
    let activation = manager.use_version(version)?;

    println!("Now using Node.js {}", activation.version.green());
    println!(
        "{} {}",
        "Binaries:".bright_black(),
        activation.bin_dir.display()
    );

    Ok(())
}
