//! Runtime detection for Node.js, npx and the package managers

use crate::runtime::package_manager::PackageManager;
use semver::Version;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// "Node.js (v20.11.0)" or "Node.js (not installed)"
    pub fn summary(&self) -> String {
        if self.available {
            format!("{} ({})", self.name, self.version.as_deref().unwrap_or("unknown"))
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

/// Run `<program> --version` and report what came back
fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = if cfg!(windows) {
        Command::new("cmd")
            .args(["/C", program, "--version"])
            .output()
    } else {
        Command::new(program).arg("--version").output()
    };

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npx is available (needed for create-next-app and initializers)
pub fn check_npx() -> RuntimeInfo {
    probe("npx", "npx")
}

/// Check if the given package manager is available
pub fn check_package_manager(manager: PackageManager) -> RuntimeInfo {
    let name = match manager {
        PackageManager::Npm => "npm",
        PackageManager::Yarn => "Yarn",
        PackageManager::Pnpm => "pnpm",
    };
    probe(name, manager.command())
}

/// Compare a reported Node.js version against the minimum the generator needs.
/// Returns a warning message if it is older; unparseable versions are skipped.
pub fn check_node_version(installed: &str, minimum: &str) -> Option<String> {
    let installed_ver = parse_version(installed)?;
    let minimum_ver = parse_version(minimum)?;

    if installed_ver < minimum_ver {
        Some(format!(
            "Node.js {} is older than the required {}",
            installed.trim(),
            minimum
        ))
    } else {
        None
    }
}

/// Parse version string, handling a leading 'v' (`node --version` prints v20.11.0)
fn parse_version(version_str: &str) -> Option<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).ok()
}

/// Check what the generator needs before anything is created: Node.js and npx.
/// Returns the probe results plus one problem description per missing or
/// outdated runtime.
pub fn check_generator_runtimes(min_node_version: &str) -> (Vec<RuntimeInfo>, Vec<String>) {
    let node = check_node();
    let npx = check_npx();
    let mut problems = Vec::new();

    match (node.available, node.version.as_deref()) {
        (true, Some(version)) => {
            if let Some(warning) = check_node_version(version, min_node_version) {
                problems.push(warning);
            }
        }
        _ => problems.push("Node.js is not installed".to_string()),
    }
    if !npx.available {
        problems.push("npx is not installed".to_string());
    }

    (vec![node, npx], problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_older_than_minimum() {
        let warning = check_node_version("v18.17.0", "18.18.0");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("18.18.0"));
    }

    #[test]
    fn test_node_same_or_newer() {
        assert!(check_node_version("v18.18.0", "18.18.0").is_none());
        assert!(check_node_version("v20.11.1\n", "18.18.0").is_none());
        assert!(check_node_version("22.0.0", "18.18.0").is_none());
    }

    #[test]
    fn test_invalid_versions_skip_warning() {
        assert!(check_node_version("invalid", "18.18.0").is_none());
        assert!(check_node_version("v20.1.0", "latest").is_none());
    }

    #[test]
    fn test_summary() {
        let present = RuntimeInfo {
            name: "pnpm",
            version: Some("9.1.0".to_string()),
            available: true,
        };
        let missing = RuntimeInfo {
            name: "Yarn",
            version: None,
            available: false,
        };
        assert_eq!(present.summary(), "pnpm (9.1.0)");
        assert_eq!(missing.summary(), "Yarn (not installed)");
    }

    #[test]
    fn test_probe_missing_program() {
        let info = probe("Nothing", "definitely-not-a-real-program-xyz");
        assert!(!info.available);
        assert!(info.version.is_none());
    }
}
