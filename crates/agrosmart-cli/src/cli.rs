//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::auth::{LoginArgs, RegisterArgs};
use crate::commands::resource::ResourceCommand;

/// Command-line client for the AgroSmart farm management API.
#[derive(Parser, Debug)]
#[command(name = "agrosmart")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to a daily rotating file in this directory
    #[arg(long, global = true, env = "AGROSMART_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Farm to operate on (defaults to the configured or signed-in farm)
    #[arg(long, global = true)]
    pub farm: Option<i64>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session
    Login(LoginArgs),

    /// Create an account together with its farm
    Register(RegisterArgs),

    /// Remove the stored session
    Logout,

    /// Show the stored session and configuration
    Status,

    /// Item counts for every resource of the farm
    Dashboard,

    /// Animals in the herd
    Animals(ResourceCommand),

    /// Breed catalogue
    Breeds(ResourceCommand),

    /// Animal lots
    Lots(ResourceCommand),

    /// Paddocks and corrals
    Paddocks(ResourceCommand),

    /// Milking records
    Milkings(ResourceCommand),

    /// Show or change configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Set the API base address
    #[arg(long)]
    pub api_url: Option<String>,

    /// Set the farm used when --farm is not given
    #[arg(long)]
    pub default_farm: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::resource::ResourceAction;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_farm_after_subcommand() {
        let cli = Cli::try_parse_from(["agrosmart", "animals", "list", "--farm", "4", "--page", "2"])
            .expect("parse");
        assert_eq!(cli.farm, Some(4));
        match cli.command {
            Commands::Animals(ResourceCommand {
                action: ResourceAction::List { page, size },
            }) => {
                assert_eq!(page, Some(2));
                assert_eq!(size, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_update_takes_id_and_file() {
        let cli = Cli::try_parse_from(["agrosmart", "milkings", "update", "5", "--file", "-"])
            .expect("parse");
        match cli.command {
            Commands::Milkings(ResourceCommand {
                action: ResourceAction::Update { id, file },
            }) => {
                assert_eq!(id, 5);
                assert_eq!(file, PathBuf::from("-"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["agrosmart", "-vv", "status"]).expect("parse");
        assert_eq!(cli.verbose, 2);
    }
}
