use anyhow::Result;
use buildrunner_core::{PackageRootFinder, ResolutionResult, resolve};
use tracing::debug;

use crate::host;

pub fn resolve_command(filepath: &str, workspace: Option<&str>, json: bool) -> Result<()> {
    let document = host::load_document(filepath)?;
    let folder = host::resolve_workspace(workspace)?;
    debug!(
        "resolving {} against workspace {}",
        document.absolute_path, folder.root_path
    );

    let resolution = resolve(&document, Some(&folder));

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    match &resolution {
        ResolutionResult::NoTarget => {
            println!("No target: the file is not nested inside the workspace");
        }
        ResolutionResult::Unfiltered { base_directory } => {
            println!("Base directory: {base_directory}");
            println!("Build filters:  none (unfiltered build)");
            print_package_root(base_directory);
        }
        ResolutionResult::Filtered {
            base_directory,
            filter_patterns,
        } => {
            println!("Base directory: {base_directory}");
            println!("Build filters:");
            for pattern in filter_patterns {
                println!("  {base_directory}{pattern}");
            }
            print_package_root(base_directory);
        }
    }

    Ok(())
}

fn print_package_root(base_directory: &str) {
    match PackageRootFinder::new().find(base_directory) {
        Some(root) => println!("Package root:   {root}"),
        None => println!("Package root:   not found (no pubspec.yaml)"),
    }
}
