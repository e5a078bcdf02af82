use std::path::Path;

use anyhow::{Context, Result};
use buildrunner_core::{BuildCommand, PackageRootFinder, ResolutionResult, Settings, resolve};
use tracing::{debug, info};

use crate::host;

pub fn build_command(filepath: &str, workspace: Option<&str>, dry_run: bool) -> Result<()> {
    let document = host::load_document(filepath)?;
    let folder = host::resolve_workspace(workspace)?;
    debug!(
        "resolving {} against workspace {}",
        document.absolute_path, folder.root_path
    );

    let settings = Settings::discover(Path::new(&folder.root_path));
    let command_prefix = settings.command_prefix();

    let resolution = resolve(&document, Some(&folder));
    let command = match &resolution {
        ResolutionResult::NoTarget => {
            // An explicit --workspace stands in for the editor's
            // workspace-folder picker: run unfiltered from its root.
            if workspace.is_some() {
                BuildCommand::unscoped(folder.root_path.clone(), command_prefix)
            } else {
                println!("Please select a project to run build_runner in");
                return Ok(());
            }
        }
        _ => {
            let package_root = resolution
                .base_directory()
                .and_then(|base| PackageRootFinder::new().find(base));
            if package_root.is_none() {
                debug!("no pubspec.yaml found; running without a cd prefix");
            }
            BuildCommand::from_resolution(&resolution, package_root, command_prefix)
                .context("no command for a resolved target")?
        }
    };

    if dry_run {
        println!("{}", command.to_shell_command());
        if let Some(ref dir) = command.package_root {
            println!("Working directory: {dir}");
        }
        return Ok(());
    }

    let shell_cmd = command.to_shell_command();
    info!("Running: {shell_cmd}");
    println!("Running build_runner quickly");

    let status = command
        .execute()
        .with_context(|| format!("Failed to execute: {shell_cmd}"))?;

    // The exit code is reported but not acted on; the run is considered
    // finished either way.
    debug!("build_runner exited with {status}");
    println!("build_runner process finished");

    Ok(())
}
