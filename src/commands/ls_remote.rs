use anyhow::Result;
use colored::Colorize;
use node_shift::VersionManager;

pub fn execute(manager: &VersionManager, lts_only: bool, limit: usize) -> Result<()> {
    println!("Fetching available Node.js versions...");

    let available = manager.list_remote();

    if available.is_empty() {
        println!("Could not determine available versions");
        return Ok(());
    }

    println!("\nAvailable Node.js versions:");

    let mut shown = available
        .iter()
        .filter(|d| !lts_only || d.is_lts())
        .peekable();

    for descriptor in shown.by_ref().take(limit) {
        let version = descriptor.version.as_str();
        let mut line = match descriptor.lts.as_deref() {
            Some(codename) => format!("{} {}", version, format!("(LTS: {})", codename).cyan()),
            None => version.to_string(),
        };
        if descriptor.security {
            line.push_str(&format!(" {}", "[security]".red()));
        }

        let installed = manager.is_installed(version);
        let is_current = manager.current() == Some(version);

        if is_current {
            println!("* {} {}", line, "(installed, current)".green());
        } else if installed {
            println!("* {} {}", line, "(installed)".yellow());
        } else {
            println!("  {}", line);
        }
    }

    if shown.peek().is_some() {
        println!("  ... and more");
    }

    Ok(())
}
