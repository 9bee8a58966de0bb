//! Scaffolding workflow
//!
//! A run moves through these steps in order, stopping at the first failure:
//!
//! 1. Collect the operator's choices
//! 2. Create the target directory (must not exist yet)
//! 3. Run the framework generator into it
//! 4. Resolve the catalog entry for the chosen UI variant
//! 5. Overlay the boilerplate tree
//! 6. Install runtime dependencies, then dev dependencies
//! 7. Run the variant's post-init command, if it has one
//!
//! Nothing is rolled back. A failure after step 2 leaves the target directory
//! as the last successful step left it.

use crate::boilerplate::{prepare_target, stage_boilerplate, Catalog};
use crate::choice::{collect_choice, Choice, ChoiceProvider};
use crate::config::generator_invocation;
use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use crate::runtime::process::{install_dependencies, CommandRunner};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub choice: Choice,
    pub target: PathBuf,
    /// Boilerplate files written over the generated project
    pub staged_files: Vec<PathBuf>,
}

/// Drives a scaffolding run for one product
pub struct Scaffolder<C: ProductConfig, R: CommandRunner> {
    config: C,
    catalog: Catalog,
    runner: R,
    base_dir: PathBuf,
    package_manager_hint: Option<String>,
}

impl<C: ProductConfig, R: CommandRunner> Scaffolder<C, R> {
    /// Create a scaffolder that creates projects under `base_dir`
    pub fn new(config: C, catalog: Catalog, runner: R, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            catalog,
            runner,
            base_dir: base_dir.into(),
            package_manager_hint: None,
        }
    }

    /// Set the hint the package manager is detected from
    pub fn with_package_manager_hint(mut self, hint: Option<String>) -> Self {
        self.package_manager_hint = hint;
        self
    }

    /// Directory a project with this name is created in
    pub fn target_for(&self, project_name: &str) -> PathBuf {
        self.base_dir.join(project_name)
    }

    /// Collect the choices, then scaffold
    pub async fn run<P: ChoiceProvider + ?Sized>(
        &self,
        project_name: Option<&str>,
        prompts: &mut P,
    ) -> Result<ScaffoldReport> {
        let choice = self.collect(project_name, prompts)?;
        self.scaffold(choice).await
    }

    /// Collect the operator's choices. Nothing on disk is touched.
    pub fn collect<P: ChoiceProvider + ?Sized>(
        &self,
        project_name: Option<&str>,
        prompts: &mut P,
    ) -> Result<Choice> {
        collect_choice(
            project_name,
            self.package_manager_hint.as_deref(),
            prompts,
        )
    }

    /// Directory a failed [`Scaffolder::scaffold`] left behind, if any.
    ///
    /// `None` when the target was there before the run or was never created.
    pub fn partial_project(&self, choice: &Choice, err: &ScaffoldError) -> Option<PathBuf> {
        if matches!(err, ScaffoldError::AlreadyExists { .. }) {
            return None;
        }
        let target = self.target_for(&choice.project_name);
        target.exists().then_some(target)
    }

    /// Scaffold a project for choices that have already been collected
    pub async fn scaffold(&self, choice: Choice) -> Result<ScaffoldReport> {
        let target = self.target_for(&choice.project_name);

        prepare_target(&target).await?;
        info!(target = %target.display(), "target directory created");

        println!();
        println!(
            "{}",
            format!("Creating {} project...", self.config.display_name())
                .cyan()
                .bold()
        );
        let generator =
            generator_invocation(&self.config, &target, choice.package_manager, &self.base_dir);
        self.runner.run(&generator).await?;

        let entry = self.catalog.resolve(choice.ui_variant)?;

        println!();
        println!(
            "{}",
            format!("Copying boilerplate for {}...", choice.ui_variant)
                .cyan()
                .bold()
        );
        let staged_files = stage_boilerplate(&entry.boilerplate, &target).await?;
        info!(files = staged_files.len(), "boilerplate staged");

        println!();
        println!("{}", "Installing additional dependencies...".cyan().bold());
        self.install(&choice, &entry.dependencies, false, &target)
            .await?;
        self.install(&choice, &entry.dev_dependencies, true, &target)
            .await?;

        if let Some(post_init) = &entry.post_init {
            println!();
            println!(
                "{}",
                format!("Initializing {}...", choice.ui_variant).cyan().bold()
            );
            self.runner.run(&post_init.invocation(&target)).await?;
        }

        Ok(ScaffoldReport {
            choice,
            target,
            staged_files,
        })
    }

    async fn install(
        &self,
        choice: &Choice,
        deps: &[String],
        dev: bool,
        target: &Path,
    ) -> Result<()> {
        install_dependencies(&self.runner, choice.package_manager, deps, dev, target).await
    }
}
