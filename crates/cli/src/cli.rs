use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{GenerateArgs, generate_command, init_command};

#[derive(Parser)]
#[command(name = "ngforge")]
#[command(version, about = "Scaffold artifacts and wire them into host declarations", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an artifact and register it with its host declaration
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),
    /// Write a default .ngforge.json configuration
    Init {
        /// Custom working directory (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Force overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Generate(args) => generate_command(args),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
