use std::io;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::types::ResolutionResult;

const BUILD_ARGS: [&str; 4] = ["run", "build_runner", "build", "--delete-conflicting-outputs"];

/// A fully resolved build_runner invocation.
///
/// `build_filters` hold the complete `<baseDirectory><pattern>` values; the
/// `--build-filter=` flag prefix is applied at render/execute time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    /// `dart` or `<sdkPath>/bin/dart`.
    pub command_prefix: String,
    /// Working directory for the run; `None` when no package manifest was
    /// found, in which case the command runs from wherever the host is.
    pub package_root: Option<String>,
    pub build_filters: Vec<String>,
}

impl BuildCommand {
    /// Build a command from a resolution. `NoTarget` yields `None`; the
    /// caller falls back to asking the user to pick a workspace.
    pub fn from_resolution(
        resolution: &ResolutionResult,
        package_root: Option<String>,
        command_prefix: impl Into<String>,
    ) -> Option<Self> {
        let build_filters = match resolution {
            ResolutionResult::NoTarget => return None,
            ResolutionResult::Unfiltered { .. } => Vec::new(),
            ResolutionResult::Filtered {
                base_directory,
                filter_patterns,
            } => filter_patterns
                .iter()
                .map(|pattern| format!("{base_directory}{pattern}"))
                .collect(),
        };

        Some(Self {
            command_prefix: command_prefix.into(),
            package_root,
            build_filters,
        })
    }

    /// The workspace-picker fallback: run unfiltered from the chosen
    /// workspace root.
    pub fn unscoped(workspace_root: impl Into<String>, command_prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: command_prefix.into(),
            package_root: Some(workspace_root.into()),
            build_filters: Vec::new(),
        }
    }

    /// Render the shell command string:
    ///
    /// `[cd <root> && ]<prefix> run build_runner build
    /// --delete-conflicting-outputs [--build-filter="<filter>" ...]`
    pub fn to_shell_command(&self) -> String {
        let mut cmd = String::new();
        if let Some(ref root) = self.package_root {
            cmd.push_str(&format!("cd {root} && "));
        }
        cmd.push_str(&self.command_prefix);
        for arg in BUILD_ARGS {
            cmd.push(' ');
            cmd.push_str(arg);
        }
        for filter in &self.build_filters {
            cmd.push_str(&format!(" --build-filter=\"{filter}\""));
        }
        cmd
    }

    /// Run the command as a child process. The exit code is reported back
    /// but not interpreted here.
    pub fn execute(&self) -> io::Result<ExitStatus> {
        let mut cmd = Command::new(&self.command_prefix);
        cmd.args(BUILD_ARGS);
        for filter in &self.build_filters {
            cmd.arg(format!("--build-filter={filter}"));
        }
        if let Some(ref root) = self.package_root {
            cmd.current_dir(root);
        }

        debug!("executing: {}", self.to_shell_command());
        cmd.status()
    }
}
