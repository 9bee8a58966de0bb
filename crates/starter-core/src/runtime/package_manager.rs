//! Package manager detection and install commands

use crate::runtime::process::CommandInvocation;
use clap::ValueEnum;
use std::fmt;
use std::path::Path;

/// Package managers a project can be set up with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Order in which the managers are offered to the operator
    pub const PROMPT_ORDER: [PackageManager; 3] =
        [PackageManager::Pnpm, PackageManager::Npm, PackageManager::Yarn];

    /// Executable name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Guess the package manager from a user agent style hint
    /// (e.g. `pnpm/8.0.0 npm/? node/v18.17.0 linux x64`).
    ///
    /// Anything unrecognised, including a missing or empty hint, maps to npm.
    pub fn detect(hint: Option<&str>) -> PackageManager {
        let hint = hint.unwrap_or_default();
        if hint.starts_with("pnpm") {
            PackageManager::Pnpm
        } else if hint.starts_with("yarn") {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    /// Arguments that add `deps` to the project manifest
    pub fn add_args(&self, deps: &[String], dev: bool) -> Vec<String> {
        let mut args = Vec::with_capacity(deps.len() + 2);
        match self {
            PackageManager::Npm => {
                args.push("install".to_string());
                if dev {
                    args.push("--save-dev".to_string());
                }
                args.extend(deps.iter().cloned());
            }
            PackageManager::Yarn => {
                args.push("add".to_string());
                args.extend(deps.iter().cloned());
                if dev {
                    args.push("--dev".to_string());
                }
            }
            PackageManager::Pnpm => {
                args.push("add".to_string());
                args.extend(deps.iter().cloned());
                if dev {
                    args.push("-D".to_string());
                }
            }
        }
        args
    }

    /// Build the install invocation for `deps`, or `None` when there is
    /// nothing to install
    pub fn install_invocation(
        &self,
        deps: &[String],
        dev: bool,
        working_dir: &Path,
    ) -> Option<CommandInvocation> {
        if deps.is_empty() {
            return None;
        }
        Some(CommandInvocation::new(
            self.command(),
            self.add_args(deps, dev),
            working_dir,
        ))
    }

    /// Command that starts the Next.js dev server
    pub fn dev_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run dev",
            PackageManager::Yarn => "yarn dev",
            PackageManager::Pnpm => "pnpm dev",
        }
    }

    /// Flag telling create-next-app which manager to bootstrap with
    pub fn generator_flag(&self) -> &'static str {
        match self {
            PackageManager::Npm => "--use-npm",
            PackageManager::Yarn => "--use-yarn",
            PackageManager::Pnpm => "--use-pnpm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn deps(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_from_user_agent() {
        assert_eq!(
            PackageManager::detect(Some("pnpm/8.0.0 node/18")),
            PackageManager::Pnpm
        );
        assert_eq!(PackageManager::detect(Some("yarn/1.22")), PackageManager::Yarn);
        assert_eq!(
            PackageManager::detect(Some("npm/10.2.4 node/v20.11.0 darwin arm64")),
            PackageManager::Npm
        );
    }

    #[test]
    fn test_detect_defaults_to_npm() {
        assert_eq!(PackageManager::detect(None), PackageManager::Npm);
        assert_eq!(PackageManager::detect(Some("")), PackageManager::Npm);
        assert_eq!(PackageManager::detect(Some("bun/1.1.0")), PackageManager::Npm);
        // Only a prefix counts
        assert_eq!(
            PackageManager::detect(Some("node/18 pnpm/8.0.0")),
            PackageManager::Npm
        );
    }

    #[test]
    fn test_add_args_per_manager() {
        let d = deps(&["axios", "zod"]);
        assert_eq!(
            PackageManager::Npm.add_args(&d, false),
            deps(&["install", "axios", "zod"])
        );
        assert_eq!(
            PackageManager::Npm.add_args(&d, true),
            deps(&["install", "--save-dev", "axios", "zod"])
        );
        assert_eq!(
            PackageManager::Yarn.add_args(&d, true),
            deps(&["add", "axios", "zod", "--dev"])
        );
        assert_eq!(
            PackageManager::Pnpm.add_args(&d, true),
            deps(&["add", "axios", "zod", "-D"])
        );
        assert_eq!(
            PackageManager::Pnpm.add_args(&d, false),
            deps(&["add", "axios", "zod"])
        );
    }

    #[test]
    fn test_install_invocation_skips_empty_list() {
        let dir = PathBuf::from("demo");
        assert!(PackageManager::Yarn
            .install_invocation(&[], true, &dir)
            .is_none());

        let invocation = PackageManager::Yarn
            .install_invocation(&deps(&["axios"]), false, &dir)
            .unwrap();
        assert_eq!(invocation.program, "yarn");
        assert_eq!(invocation.working_dir, dir);
    }
}
