//! create-next-starter - Next.js project scaffolding with UI boilerplates

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use starter_core::tui::CreateArgs;
use starter_core::{PackageManager, ProductConfig, ScaffoldError, UiVariant};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable controlling diagnostic log output
const LOG_ENV: &str = "NEXT_STARTER_LOG";

/// Next starter product configuration
#[derive(Clone)]
pub struct StarterConfig;

impl ProductConfig for StarterConfig {
    fn display_name(&self) -> &'static str {
        "Next.js Starter"
    }

    fn boilerplate_dir_env(&self) -> &'static str {
        "NEXT_STARTER_BOILERPLATE_DIR"
    }

    fn bundled_boilerplate_dir(&self) -> &'static Path {
        Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../boilerplates"))
    }

    fn generator_package(&self) -> &'static str {
        "create-next-app@latest"
    }

    /// Boilerplates overlay `src/app`, so the generator must lay the project out under `src/`
    fn generator_flags(&self) -> &'static [&'static str] {
        &["--eslint", "--tailwind", "--app", "--src-dir"]
    }

    fn min_node_version(&self) -> &'static str {
        "18.18.0"
    }

    fn next_steps(&self, dir: &Path, manager: PackageManager) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to the project
        let relative = current
            .as_deref()
            .and_then(|cwd| dir.strip_prefix(cwd).ok())
            .unwrap_or(dir);
        steps.push(format!("cd {}", relative.display()));

        // Step 2: Start the dev server
        steps.push(manager.dev_command().to_string());

        // Step 3: Open the app
        steps.push("Open http://localhost:3000".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-next-starter")]
#[command(about = "CLI for scaffolding Next.js projects with a ready-made UI boilerplate")]
#[command(version)]
pub struct Args {
    /// Name of the project directory to create
    pub project_name: Option<String>,

    /// Package manager to install with (skips the prompt)
    #[arg(short, long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// UI library to set up (skips the prompt)
    #[arg(short, long, value_enum)]
    pub ui: Option<UiVariant>,

    /// Local directory to use for boilerplates instead of the installed ones (for development use)
    #[arg(long = "boilerplate-dir")]
    pub boilerplate_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Print debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.project_name,
            package_manager: args.package_manager,
            ui: args.ui,
            boilerplate_dir: args.boilerplate_dir,
            yes: args.yes,
        }
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// One line per failure, prefixed by severity
fn report_error(err: &ScaffoldError) {
    let prefix = if err.is_internal() {
        "internal error:"
    } else {
        "error:"
    };
    eprintln!("{} {}", prefix.red().bold(), err);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully; the child process gets the signal too
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.verbose)?;

    let config = StarterConfig;
    let result = starter_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        report_error(&err);
        std::process::exit(1);
    }

    Ok(())
}
