//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a binary implements to configure the
//! scaffolding behavior: names, environment variables, and the generator it
//! delegates to.

use crate::runtime::package_manager::PackageManager;
use std::path::Path;

/// Configuration trait for scaffolding CLI products
///
/// Each product implements this trait to define:
/// - Product identity (display name)
/// - Environment variables it reads
/// - Where its boilerplates live
/// - The framework generator and its fixed flags
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable carrying the package manager hint
    fn package_manager_hint_env(&self) -> &'static str {
        "npm_config_user_agent"
    }

    /// Environment variable for overriding the boilerplate root
    fn boilerplate_dir_env(&self) -> &'static str;

    /// Boilerplate root bundled with the source tree
    fn bundled_boilerplate_dir(&self) -> &'static Path;

    /// Package spec passed to npx to run the framework generator
    fn generator_package(&self) -> &'static str;

    /// Flags always passed to the generator
    fn generator_flags(&self) -> &'static [&'static str];

    /// Oldest Node.js release the generator supports
    fn min_node_version(&self) -> &'static str;

    /// Where to send users who need to install Node.js
    fn node_docs_url(&self) -> &'static str {
        "https://nodejs.org/en/download"
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, manager: PackageManager) -> Vec<String>;
}
