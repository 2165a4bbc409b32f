use anyhow::Result;
use colored::Colorize;
use node_shift::{InstallOutcome, InstallRequest, VersionManager};

pub fn execute(manager: &mut VersionManager, version: Option<&str>, lts: bool) -> Result<()> {
    let request = match version {
        Some(version) if !lts => InstallRequest::parse(version),
        _ => InstallRequest::Lts,
    };

    if matches!(request, InstallRequest::Lts | InstallRequest::Latest) {
        println!("Fetching available Node.js versions...");
    }

    match manager.install(request)? {
        InstallOutcome::Installed(version) => {
            println!("Successfully installed Node.js {}", version.green());
            if manager.current().is_none() {
                println!(
                    "Run '{}' to activate it",
                    format!("node-shift use {}", version).bright_white()
                );
            }
        }
        InstallOutcome::AlreadyInstalled(version) => {
            println!("Node.js {} is already installed", version.yellow());
        }
    }

    Ok(())
}
