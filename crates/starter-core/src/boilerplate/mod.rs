//! Boilerplate catalog, location and staging
//!
//! This module provides:
//! - The catalog mapping each UI variant to its boilerplate tree and packages
//! - Lookup of the boilerplate root directory
//! - Target directory creation and the boilerplate overlay copy

pub mod catalog;
pub mod source;
pub mod stager;

pub use catalog::{Catalog, CatalogEntry, CommandSpec, UiVariant};
pub use source::BoilerplateSource;
pub use stager::{prepare_target, stage_boilerplate};
