//! Charm-style CLI prompts using cliclack

use crate::boilerplate::{BoilerplateSource, Catalog, UiVariant};
use crate::choice::ChoiceProvider;
use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use crate::runtime::check;
use crate::runtime::package_manager::PackageManager;
use crate::runtime::process::ProcessRunner;
use crate::scaffold::{ScaffoldReport, Scaffolder};
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of the project directory to create
    pub project_name: Option<String>,

    /// Package manager to use instead of asking
    pub package_manager: Option<PackageManager>,

    /// UI library to use instead of asking
    pub ui: Option<UiVariant>,

    /// Local boilerplate root to use instead of the installed one
    pub boilerplate_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Answers the scaffolder's questions with cliclack prompts, or from flags
/// when they were given
pub struct CliclackPrompts<'a, C: ProductConfig> {
    config: &'a C,
    package_manager: Option<PackageManager>,
    ui: Option<UiVariant>,
    yes: bool,
}

impl<'a, C: ProductConfig> CliclackPrompts<'a, C> {
    pub fn new(config: &'a C, args: &CreateArgs) -> Self {
        Self {
            config,
            package_manager: args.package_manager,
            ui: args.ui,
            yes: args.yes,
        }
    }

    /// Node.js and npx are needed before anything is created. Problems are
    /// reported, and the operator decides whether to go on.
    fn check_generator_runtimes(&self) -> Result<()> {
        let spinner = cliclack::spinner();
        spinner.start("Checking runtimes...");

        let (runtimes, problems) = check::check_generator_runtimes(self.config.min_node_version());
        let summary: Vec<String> = runtimes.iter().map(|r| r.summary()).collect();

        if problems.is_empty() {
            spinner.stop(format!("Detected runtimes: {}", summary.join(", ")));
            return Ok(());
        }

        spinner.stop(format!("Runtime problems: {}", summary.join(", ")));
        for problem in &problems {
            cliclack::log::warning(problem)?;
        }

        // In non-interactive mode, just continue
        if self.yes {
            cliclack::log::info("Continuing anyway (--yes mode)")?;
            return Ok(());
        }

        let action: &str = cliclack::select("What would you like to do?")
            .item(
                "docs",
                format!("Open Node.js download page ({})", self.config.node_docs_url()),
                "",
            )
            .item("continue", "Continue anyway", "")
            .item("cancel", "Cancel", "")
            .interact()?;

        match action {
            "docs" => {
                open::that(self.config.node_docs_url())
                    .map_err(|e| ScaffoldError::io("Failed to open browser", e))?;
                cliclack::outro("After installing Node.js, run this command again.")?;
                Err(ScaffoldError::usage("Setup cancelled."))
            }
            "continue" => Ok(()),
            _ => Err(ScaffoldError::usage("Setup cancelled.")),
        }
    }
}

impl<C: ProductConfig> ChoiceProvider for CliclackPrompts<'_, C> {
    fn confirm_package_manager(&mut self, detected: PackageManager) -> Result<PackageManager> {
        self.check_generator_runtimes()?;

        let manager = if let Some(manager) = self.package_manager {
            cliclack::log::info(format!("Using package manager: {}", manager))?;
            manager
        } else if self.yes {
            cliclack::log::info(format!("Using detected package manager: {}", detected))?;
            detected
        } else {
            let mut select = cliclack::select(format!(
                "Detected package manager: {}. Please confirm:",
                detected
            ));
            for manager in PackageManager::PROMPT_ORDER {
                select = select.item(manager, manager.command(), "");
            }
            select.initial_value(detected).interact()?
        };

        let info = check::check_package_manager(manager);
        if info.available {
            cliclack::log::success(info.summary())?;
        } else {
            cliclack::log::warning(format!(
                "{} was not found on PATH; installing dependencies will fail",
                manager
            ))?;
        }

        Ok(manager)
    }

    fn select_ui_variant(&mut self) -> Result<UiVariant> {
        if let Some(ui) = self.ui {
            cliclack::log::info(format!("Using UI library: {}", ui))?;
            return Ok(ui);
        }
        if self.yes {
            cliclack::log::info(format!("Using UI library: {}", UiVariant::None))?;
            return Ok(UiVariant::None);
        }

        let mut select = cliclack::select("Which UI library do you want?");
        for variant in UiVariant::ALL {
            select = select.item(variant, variant.display_name(), "");
        }
        Ok(select.interact()?)
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<ScaffoldReport> {
    cliclack::intro(config.display_name())?;

    let source = BoilerplateSource::from_config(config, args.boilerplate_dir.clone());
    match &source {
        BoilerplateSource::Explicit(path) | BoilerplateSource::Environment(path) => {
            cliclack::log::info(format!("Using local boilerplates from {}", path.display()))?;
        }
        BoilerplateSource::Installed(_) | BoilerplateSource::Bundled(_) => {}
    }

    let base_dir = std::env::current_dir()
        .map_err(|e| ScaffoldError::io("Failed to read current directory", e))?;
    let hint = std::env::var(config.package_manager_hint_env()).ok();

    let scaffolder = Scaffolder::new(
        config.clone(),
        Catalog::builtin(source.root()),
        ProcessRunner::new(),
        base_dir,
    )
    .with_package_manager_hint(hint);

    // Prompt failures happen before anything is created, so nothing is left behind
    let mut prompts = CliclackPrompts::new(config, &args);
    let choice = scaffolder.collect(args.project_name.as_deref(), &mut prompts)?;

    match scaffolder.scaffold(choice.clone()).await {
        Ok(report) => {
            println!();
            cliclack::log::success(format!(
                "Project \"{}\" setup complete!",
                report.choice.project_name
            ))?;
            print_next_steps(config, &report)?;
            Ok(report)
        }
        Err(err) => {
            if let Some(target) = scaffolder.partial_project(&choice, &err) {
                report_partial_project(&target);
            }
            Err(err)
        }
    }
}

/// A failed run is never cleaned up; say where the leftovers are
fn report_partial_project(target: &Path) {
    let _ = cliclack::log::warning(format!(
        "The partially created project was left in place at {}",
        target.display()
    ));
}

fn print_next_steps<C: ProductConfig>(config: &C, report: &ScaffoldReport) -> Result<()> {
    let steps = config.next_steps(&report.target, report.choice.package_manager);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
