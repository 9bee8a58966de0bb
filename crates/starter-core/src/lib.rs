//! Starter Core - Shared library for Next.js starter scaffolding CLIs
//!
//! This library creates a project with an external framework generator, overlays
//! a boilerplate variant chosen from a fixed catalog, and installs that variant's
//! packages with the operator's package manager.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Package manager detection, command execution,
//!   the boilerplate catalog and the filesystem staging
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait, `ChoiceProvider`
//!   and the `Scaffolder` state machine
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use starter_core::{Catalog, Choice, PackageManager, ProcessRunner, Scaffolder, UiVariant};
//!
//! let catalog = Catalog::builtin("boilerplates");
//! let scaffolder = Scaffolder::new(MyConfig, catalog, ProcessRunner::new(), ".");
//! let report = scaffolder
//!     .scaffold(Choice {
//!         project_name: "my-app".into(),
//!         package_manager: PackageManager::Pnpm,
//!         ui_variant: UiVariant::Shadcn,
//!     })
//!     .await?;
//! ```

pub mod boilerplate;
pub mod choice;
pub mod config;
pub mod error;
pub mod product;
pub mod runtime;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use boilerplate::{BoilerplateSource, Catalog, CatalogEntry, CommandSpec, UiVariant};
pub use choice::{collect_choice, Choice, ChoiceProvider};
pub use error::{Result, ScaffoldError};
pub use product::ProductConfig;
pub use runtime::{CommandInvocation, CommandRunner, PackageManager, ProcessRunner};
pub use scaffold::{ScaffoldReport, Scaffolder};

#[cfg(feature = "tui")]
pub use tui::run;
