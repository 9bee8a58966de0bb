//! The operator's choices for a run

use crate::boilerplate::catalog::UiVariant;
use crate::error::{Result, ScaffoldError};
use crate::runtime::package_manager::PackageManager;

/// Validated choices for one scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub project_name: String,
    pub package_manager: PackageManager,
    pub ui_variant: UiVariant,
}

/// Source of the interactive answers
///
/// The terminal front-end asks the operator; tests script the answers.
pub trait ChoiceProvider {
    /// Confirm or override the detected package manager
    fn confirm_package_manager(&mut self, detected: PackageManager) -> Result<PackageManager>;

    /// Pick the UI library
    fn select_ui_variant(&mut self) -> Result<UiVariant>;
}

/// Validate the project name given on the command line
pub fn validate_project_name(project_name: Option<&str>) -> Result<String> {
    match project_name.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(ScaffoldError::usage(
            "Please provide a project name. Example: create-next-starter my-app",
        )),
    }
}

/// Gather the choices for a run. The package manager hint is only a
/// suggestion; the provider always gets to confirm it.
pub fn collect_choice<P: ChoiceProvider + ?Sized>(
    project_name: Option<&str>,
    package_manager_hint: Option<&str>,
    provider: &mut P,
) -> Result<Choice> {
    let project_name = validate_project_name(project_name)?;

    let detected = PackageManager::detect(package_manager_hint);
    let package_manager = provider.confirm_package_manager(detected)?;
    let ui_variant = provider.select_ui_variant()?;

    Ok(Choice {
        project_name,
        package_manager,
        ui_variant,
    })
}
