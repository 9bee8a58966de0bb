//! Error types for starter-core

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the scaffolder's error type
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Everything that can stop a scaffolding run
///
/// Every variant is fatal: the run stops at the step that produced it and
/// nothing already written to disk is rolled back.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Bad or missing invocation arguments
    #[error("{0}")]
    Usage(String),

    /// The target directory (or a file with that name) already exists
    #[error("Folder \"{}\" already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// A catalog entry points at a boilerplate directory that is not there
    #[error("Boilerplate folder not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The catalog itself is inconsistent
    #[error("Invalid boilerplate catalog: {0}")]
    Configuration(String),

    /// A delegated tool ran but did not succeed
    #[error("`{command}` {}", describe_exit(*code))]
    ExternalCommand { command: String, code: Option<i32> },

    /// A delegated tool could not be started at all
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// An interactive prompt failed or was cancelled
    #[error("Prompt failed: {0}")]
    Prompt(#[from] io::Error),

    /// Filesystem failure while preparing or staging the project
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Packaging or catalog defects, as opposed to operator mistakes and
    /// failures of the external tools
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. } | Self::Configuration(_))
    }

    /// Exit code of the failed external command, if that is what failed
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ExternalCommand { code, .. } => *code,
            _ => None,
        }
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("failed with exit code {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_command_message_includes_exit_code() {
        let err = ScaffoldError::ExternalCommand {
            command: "pnpm add axios".to_string(),
            code: Some(2),
        };
        assert_eq!(err.to_string(), "`pnpm add axios` failed with exit code 2");
        assert_eq!(err.exit_code(), Some(2));
    }

    #[test]
    fn test_signal_termination_message() {
        let err = ScaffoldError::ExternalCommand {
            command: "npx shadcn@latest init".to_string(),
            code: None,
        };
        assert!(err.to_string().ends_with("was terminated by a signal"));
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn test_internal_errors() {
        assert!(ScaffoldError::SourceNotFound {
            path: PathBuf::from("boilerplates/none")
        }
        .is_internal());
        assert!(ScaffoldError::configuration("missing row").is_internal());
        assert!(!ScaffoldError::usage("no project name").is_internal());
        assert!(!ScaffoldError::AlreadyExists {
            path: PathBuf::from("demo")
        }
        .is_internal());
    }
}
