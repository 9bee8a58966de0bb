//! External command execution
//!
//! Everything the scaffolder delegates (create-next-app, the package manager,
//! UI-library initializers) goes through [`CommandRunner`], so the orchestration
//! can be driven by a fake runner in tests.

use crate::error::{Result, ScaffoldError};
use crate::runtime::package_manager::PackageManager;
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;
use tracing::{debug, info};

/// A single external command: program, arguments and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl CommandInvocation {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: working_dir.into(),
        }
    }

    /// The command line as shown to the operator
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Executes external commands to completion
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run the command and wait for it; any unsuccessful exit is an error
    async fn run(&self, invocation: &CommandInvocation) -> Result<()>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    async fn run(&self, invocation: &CommandInvocation) -> Result<()> {
        (**self).run(invocation).await
    }
}

/// Runs commands as child processes sharing this process's terminal
///
/// The child inherits stdin, stdout and stderr so prompts and progress output
/// of the delegated tool stay interactive. No timeout is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &CommandInvocation) -> TokioCommand {
        // npm, npx, yarn and pnpm are .cmd shims on Windows
        let mut command = if cfg!(windows) {
            let mut cmd = TokioCommand::new("cmd");
            cmd.arg("/C").arg(&invocation.program);
            cmd
        } else {
            TokioCommand::new(&invocation.program)
        };
        command
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &CommandInvocation) -> Result<()> {
        let command_line = invocation.command_line();
        println!();
        println!("{} {}", "Running:".dimmed(), command_line.yellow());
        println!();
        debug!(cwd = %invocation.working_dir.display(), "spawning {}", command_line);

        let status = Self::command(invocation)
            .status()
            .await
            .map_err(|source| ScaffoldError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        if status.success() {
            info!("`{}` finished", command_line);
            Ok(())
        } else {
            Err(ScaffoldError::ExternalCommand {
                command: command_line,
                code: status.code(),
            })
        }
    }
}

/// Add `deps` to the project in `working_dir`.
///
/// An empty list is a no-op: the runner is not called, since an add command
/// without packages is either invalid or reinstalls everything.
pub async fn install_dependencies<R: CommandRunner>(
    runner: &R,
    manager: PackageManager,
    deps: &[String],
    dev: bool,
    working_dir: &Path,
) -> Result<()> {
    match manager.install_invocation(deps, dev, working_dir) {
        Some(invocation) => runner.run(&invocation).await,
        None => {
            debug!(dev, "no dependencies to install");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CountingRunner {
        calls: RefCell<Vec<CommandInvocation>>,
    }

    impl CommandRunner for CountingRunner {
        async fn run(&self, invocation: &CommandInvocation) -> Result<()> {
            self.calls.borrow_mut().push(invocation.clone());
            Ok(())
        }
    }

    #[test]
    fn test_command_line() {
        let invocation = CommandInvocation::new("npx", ["shadcn@latest", "init"], "demo");
        assert_eq!(invocation.command_line(), "npx shadcn@latest init");
        assert_eq!(invocation.to_string(), "npx shadcn@latest init");
    }

    #[tokio::test]
    async fn test_install_empty_list_never_runs() {
        let runner = CountingRunner::default();
        install_dependencies(&runner, PackageManager::Pnpm, &[], false, Path::new("demo"))
            .await
            .unwrap();
        install_dependencies(&runner, PackageManager::Npm, &[], true, Path::new("demo"))
            .await
            .unwrap();
        assert!(runner.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_install_runs_in_working_dir() {
        let runner = CountingRunner::default();
        let deps = vec!["zod".to_string()];
        install_dependencies(&runner, PackageManager::Pnpm, &deps, true, Path::new("demo"))
            .await
            .unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].command_line(), "pnpm add zod -D");
        assert_eq!(calls[0].working_dir, PathBuf::from("demo"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_process_runner_reports_exit_code() {
        let dir = tempfile::TempDir::new().unwrap();
        let invocation = CommandInvocation::new("sh", ["-c", "exit 3"], dir.path());

        let err = ProcessRunner::new().run(&invocation).await.unwrap_err();
        assert_eq!(err.exit_code(), Some(3));
        assert!(err.to_string().contains("sh -c exit 3"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_process_runner_success_uses_working_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let invocation = CommandInvocation::new("sh", ["-c", "touch ran.txt"], dir.path());

        ProcessRunner::new().run(&invocation).await.unwrap();
        assert!(dir.path().join("ran.txt").exists());
    }

    #[tokio::test]
    async fn test_process_runner_missing_program() {
        let dir = tempfile::TempDir::new().unwrap();
        let invocation =
            CommandInvocation::new("definitely-not-a-real-program-xyz", ["--version"], dir.path());

        let err = ProcessRunner::new().run(&invocation).await.unwrap_err();
        if cfg!(windows) {
            // cmd.exe itself starts and reports the failure through its exit code
            assert!(err.exit_code().is_some());
        } else {
            assert!(matches!(err, ScaffoldError::Spawn { .. }));
        }
    }
}
