//! Runtime detection and external command execution
//!
//! This module provides:
//! - Package manager detection and install command construction
//! - The command-execution seam used for every delegated tool
//! - Advisory checks for Node.js, npx and the package managers

pub mod check;
pub mod package_manager;
pub mod process;

pub use check::{check_generator_runtimes, check_package_manager, RuntimeInfo};
pub use package_manager::PackageManager;
pub use process::{install_dependencies, CommandInvocation, CommandRunner, ProcessRunner};
