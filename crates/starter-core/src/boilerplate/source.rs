//! Locating the directory that holds the boilerplate trees
//!
//! Lookup order:
//! - Explicit `--boilerplate-dir`
//! - The product's override environment variable
//! - A `boilerplates/` directory next to the installed executable
//! - The `boilerplates/` directory bundled with the source tree

use crate::product::ProductConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the boilerplate directory shipped alongside the executable
pub const BOILERPLATE_DIR_NAME: &str = "boilerplates";

/// Where the boilerplate root was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoilerplateSource {
    /// Given on the command line
    Explicit(PathBuf),
    /// Taken from the override environment variable
    Environment(PathBuf),
    /// Installed next to the executable
    Installed(PathBuf),
    /// The source tree the binary was built from
    Bundled(PathBuf),
}

impl BoilerplateSource {
    /// Resolve the boilerplate root for a product
    pub fn from_config<C: ProductConfig>(config: &C, explicit: Option<PathBuf>) -> Self {
        let env_value = std::env::var_os(config.boilerplate_dir_env()).map(PathBuf::from);
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        let source = Self::locate(
            explicit,
            env_value,
            exe_dir.as_deref(),
            config.bundled_boilerplate_dir(),
        );
        debug!(?source, "boilerplate root");
        source
    }

    /// Pick the first available location
    pub fn locate(
        explicit: Option<PathBuf>,
        env_value: Option<PathBuf>,
        exe_dir: Option<&Path>,
        bundled: &Path,
    ) -> Self {
        if let Some(path) = explicit {
            return Self::Explicit(path);
        }
        if let Some(path) = env_value.filter(|p| !p.as_os_str().is_empty()) {
            return Self::Environment(path);
        }
        if let Some(installed) = exe_dir
            .map(|dir| dir.join(BOILERPLATE_DIR_NAME))
            .filter(|dir| dir.is_dir())
        {
            return Self::Installed(installed);
        }
        Self::Bundled(bundled.to_path_buf())
    }

    pub fn root(&self) -> &Path {
        match self {
            Self::Explicit(path)
            | Self::Environment(path)
            | Self::Installed(path)
            | Self::Bundled(path) => path,
        }
    }
}
