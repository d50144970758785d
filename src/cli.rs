use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::create::CreateArgs;
use crate::commands::info::InfoArgs;

#[derive(Parser, Debug)]
#[command(
    name = "labissue",
    bin_name = "li",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq, Debug)]
pub enum Commands {
    /// Create an issue in the project tracked by this repository
    Create(CreateArgs),

    /// Show the issue associated with the current branch
    Info(InfoArgs),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
