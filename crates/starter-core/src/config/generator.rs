//! Framework generator invocation

use crate::product::ProductConfig;
use crate::runtime::package_manager::PackageManager;
use crate::runtime::process::CommandInvocation;
use std::path::Path;

/// Runner used to fetch and execute the generator package
const GENERATOR_RUNNER: &str = "npx";

/// Build the generator command for `target`, run from `base_dir`.
///
/// The product's fixed flags come first, followed by the flag selecting the
/// package manager the generator bootstraps with.
pub fn generator_invocation<C: ProductConfig>(
    config: &C,
    target: &Path,
    manager: PackageManager,
    base_dir: &Path,
) -> CommandInvocation {
    let mut args = vec![
        config.generator_package().to_string(),
        target.display().to_string(),
    ];
    args.extend(config.generator_flags().iter().map(|f| f.to_string()));
    args.push(manager.generator_flag().to_string());

    CommandInvocation::new(GENERATOR_RUNNER, args, base_dir)
}
