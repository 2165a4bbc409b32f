mod commands;
mod options;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use node_shift::{Config, ManagerError, VersionManager};

fn main() {
    let cli = options::Cli::parse();

    options::verbose::init(cli.verbose);

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ManagerError>() {
            Some(refusal) if refusal.is_soft() => {
                eprintln!("{} {}", "warning:".yellow().bold(), refusal)
            }
            _ => eprintln!("{} {:#}", "error:".red().bold(), e),
        }
        std::process::exit(1);
    }
}

fn run(cli: options::Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        let mut cmd = options::Cli::command();
        cmd.print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::from_env()?;
    log::debug!("Using base directory {}", config.base_dir.display());
    let mut manager = VersionManager::new(config)?;

    match command {
        options::Commands::List => commands::list::execute(&mut manager)?,
        options::Commands::LsRemote { lts, limit } => {
            commands::ls_remote::execute(&manager, lts, limit)?
        }
        options::Commands::Install { version, lts } => {
            commands::install::execute(&mut manager, version.as_deref(), lts)?
        }
        options::Commands::Use { version } => commands::r#use::execute(&mut manager, &version)?,
        options::Commands::Uninstall { version } => {
            commands::uninstall::execute(&mut manager, &version)?
        }
        options::Commands::Current => commands::current::execute(&manager)?,
    }

    Ok(())
}
