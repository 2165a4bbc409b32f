pub mod verbose;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List installed versions
    #[command(visible_alias = "ls")]
    List,

    /// List versions available for download
    #[command(name = "ls-remote")]
    LsRemote {
        /// Only show LTS releases
        #[arg(long)]
        lts: bool,

        /// Show at most this many versions
        #[arg(short, long, default_value_t = 30)]
        limit: usize,
    },

    /// Download and install a version
    Install {
        /// Version like 20.11.0, or `latest` / `lts`
        #[arg(required_unless_present = "lts", conflicts_with = "lts")]
        version: Option<String>,

        /// Install the newest LTS release
        #[arg(long)]
        lts: bool,
    },

    /// Activate an installed version
    #[command(name = "use")]
    Use { version: String },

    /// Remove an installed version
    Uninstall { version: String },

    /// Print the active version
    Current,
}
