//! The boilerplate catalog: which files and packages each UI choice gets

use crate::error::{Result, ScaffoldError};
use crate::runtime::process::CommandInvocation;
use clap::ValueEnum;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// UI library the project is set up with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum UiVariant {
    /// Tailwind CSS only
    None,
    /// shadcn/ui on top of Tailwind
    Shadcn,
    /// Material UI
    Mui,
}

impl UiVariant {
    pub const ALL: [UiVariant; 3] = [UiVariant::None, UiVariant::Shadcn, UiVariant::Mui];

    pub fn display_name(&self) -> &'static str {
        match self {
            UiVariant::None => "Tailwind only",
            UiVariant::Shadcn => "ShadCN UI",
            UiVariant::Mui => "Material UI (MUI)",
        }
    }
}

impl fmt::Display for UiVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A command run inside the project once dependencies are installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn invocation(&self, working_dir: &Path) -> CommandInvocation {
        CommandInvocation::new(&self.program, &self.args, working_dir)
    }
}

/// Everything applied to a project for one UI variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Boilerplate tree; a directory name relative to the catalog root until
    /// resolved, then the full path
    pub boilerplate: PathBuf,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub post_init: Option<CommandSpec>,
}

impl CatalogEntry {
    pub fn new(
        boilerplate: impl Into<PathBuf>,
        dependencies: &[&str],
        dev_dependencies: &[&str],
        post_init: Option<CommandSpec>,
    ) -> Self {
        Self {
            boilerplate: boilerplate.into(),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
            dev_dependencies: dev_dependencies.iter().map(|d| d.to_string()).collect(),
            post_init,
        }
    }

    pub fn needs_post_init(&self) -> bool {
        self.post_init.is_some()
    }

    /// Reject entries that would produce a broken install
    fn validate(&self, variant: UiVariant) -> Result<()> {
        if self.boilerplate.as_os_str().is_empty() {
            return Err(ScaffoldError::configuration(format!(
                "entry for '{}' has no boilerplate directory",
                variant
            )));
        }

        let mut seen = HashSet::new();
        for dep in self.dependencies.iter().chain(&self.dev_dependencies) {
            if !seen.insert(dep.as_str()) {
                return Err(ScaffoldError::configuration(format!(
                    "entry for '{}' lists '{}' more than once",
                    variant, dep
                )));
            }
        }
        Ok(())
    }
}

/// The built-in table. One arm per variant; adding a UI library means adding
/// a variant and its arm here.
fn builtin_entry(variant: UiVariant) -> CatalogEntry {
    match variant {
        UiVariant::None => CatalogEntry::new(
            "none",
            &[
                "@hookform/resolvers",
                "@tanstack/react-query",
                "axios",
                "react-hook-form",
                "react-icons",
            ],
            &[
                "standard-version",
                "zod",
                "tailwindcss",
                "postcss",
                "autoprefixer",
            ],
            None,
        ),
        UiVariant::Shadcn => CatalogEntry::new(
            "shadcn",
            &[
                "@hookform/resolvers",
                "@tanstack/react-query",
                "axios",
                "react-hook-form",
                "react-icons",
                "lucide-react",
                "clsx",
                "tailwind-merge",
                "class-variance-authority",
                "shadcn-ui",
            ],
            &[
                "standard-version",
                "zod",
                "tailwindcss",
                "postcss",
                "autoprefixer",
            ],
            Some(CommandSpec::new("npx", &["shadcn@latest", "init"])),
        ),
        UiVariant::Mui => CatalogEntry::new(
            "mui",
            &[
                "@mui/material",
                "@mui/icons-material",
                "@emotion/react",
                "@emotion/styled",
                "@hookform/resolvers",
                "@tanstack/react-query",
                "axios",
                "react-hook-form",
            ],
            &["standard-version", "zod"],
            None,
        ),
    }
}

/// Catalog of boilerplate variants rooted at a boilerplates directory
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
    entries: Vec<(UiVariant, CatalogEntry)>,
}

impl Catalog {
    /// The built-in catalog, with boilerplate trees under `root`
    pub fn builtin(root: impl Into<PathBuf>) -> Self {
        let entries = UiVariant::ALL
            .iter()
            .map(|&variant| (variant, builtin_entry(variant)))
            .collect();
        Self::from_entries(root, entries)
    }

    /// A catalog with custom rows
    pub fn from_entries(root: impl Into<PathBuf>, entries: Vec<(UiVariant, CatalogEntry)>) -> Self {
        Self {
            root: root.into(),
            entries,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up the entry for `variant`, with its boilerplate path made
    /// absolute against the catalog root
    pub fn resolve(&self, variant: UiVariant) -> Result<CatalogEntry> {
        let entry = self
            .entries
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, entry)| entry)
            .ok_or_else(|| {
                ScaffoldError::configuration(format!("no entry for UI variant '{}'", variant))
            })?;

        entry.validate(variant)?;

        let mut resolved = entry.clone();
        resolved.boilerplate = self.root.join(&entry.boilerplate);
        Ok(resolved)
    }
}
