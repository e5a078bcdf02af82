use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{build_command, init_command, resolve_command};

#[derive(Parser)]
#[command(name = "buildrunner")]
#[command(version, about = "Run build_runner scoped to the file you are editing", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct BuildRunner {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve build filters for a file and run build_runner
    #[command(visible_alias = "b")]
    Build {
        /// Path to the Dart file being edited
        filepath: String,

        /// Workspace root (defaults to the current directory)
        #[arg(short, long)]
        workspace: Option<String>,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Show the resolution for a file without running anything
    #[command(visible_alias = "r")]
    Resolve {
        /// Path to the Dart file being edited
        filepath: String,

        /// Workspace root (defaults to the current directory)
        #[arg(short, long)]
        workspace: Option<String>,

        /// Emit the resolution as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Initialize buildrunner configuration
    Init {
        /// Specify the current working directory
        #[arg(short, long)]
        cwd: Option<String>,

        /// SDK install path to record (command runs <sdk>/bin/dart)
        #[arg(long)]
        sdk_path: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Build {
                filepath,
                workspace,
                dry_run,
            } => build_command(&filepath, workspace.as_deref(), dry_run),
            Commands::Resolve {
                filepath,
                workspace,
                json,
            } => resolve_command(&filepath, workspace.as_deref(), json),
            Commands::Init {
                cwd,
                sdk_path,
                force,
            } => init_command(cwd.as_deref(), sdk_path.as_deref(), force),
        }
    }
}
