//! Application layer errors.
//!
//! These errors represent failures in orchestration, not naming rules.
//! Naming errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running a file-creation invocation.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No location hint and no workspace root to fall back to.
    #[error("No workspace folder found")]
    NoTargetDirectory,

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The resolved path appeared on disk between the check and the write.
    #[error("File already exists at {path}")]
    FileExists { path: PathBuf },

    /// The file was written but could not be opened afterwards.
    #[error("Created {path} but could not open it: {reason}")]
    OpenFailed { path: PathBuf, reason: String },

    /// A companion-framework template was requested while the framework is off.
    #[error("Template '{template}' is disabled")]
    TemplateDisabled { template: String },

    /// Settings access failed (lock poisoned).
    #[error("Settings store error")]
    SettingsLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoTargetDirectory => vec![
                "Pass a target directory: luafile module path/to/dir".into(),
                "Or add a workspace root with --workspace or workspace.roots".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the target directory exists".into(),
            ],
            Self::FileExists { path } => vec![
                format!("Something created {} at the same moment", path.display()),
                "Run the command again to pick the next free name".into(),
            ],
            Self::OpenFailed { path, .. } => vec![
                format!("The file was created: {}", path.display()),
                "Check editor.command or $VISUAL / $EDITOR".into(),
                "Use --no-open to skip opening".into(),
            ],
            Self::TemplateDisabled { .. } => vec![
                "Knit templates are turned off".into(),
                "Enable them: luafile config set settings.knit true".into(),
            ],
            Self::SettingsLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoTargetDirectory => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::OpenFailed { .. } => ErrorCategory::Internal,
            Self::FileExists { .. } => ErrorCategory::Validation,
            Self::TemplateDisabled { .. } => ErrorCategory::Configuration,
            Self::SettingsLockError => ErrorCategory::Internal,
        }
    }
}
