// ============================================================================
// domain/error.rs - NAMING AND TEMPLATE ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so a prompt can re-display the last failure)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Filename cannot be empty")]
    EmptyName,

    #[error("Filename contains invalid characters: {invalid}")]
    InvalidCharacters { name: String, invalid: String },

    #[error("'{name}' must end with '{suffix}'")]
    MissingRoleSuffix { name: String, suffix: &'static str },

    #[error("'{name}' needs a name before '{suffix}'")]
    EmptyStem { name: String, suffix: &'static str },

    #[error("Invalid file extension '{extension}': {reason}")]
    InvalidExtension { extension: String, reason: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Unknown naming convention: {0}")]
    UnknownConvention(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec!["Type a name for the new file".into()],
            Self::InvalidCharacters { invalid, .. } => vec![
                format!("Remove these characters: {invalid}"),
                "Allowed: letters, digits, '.', '_', '-' and spaces".into(),
            ],
            Self::MissingRoleSuffix { name, suffix } => vec![
                format!("Try: {name}{suffix}"),
                "Strict suffix checking is enabled (settings.strict_suffix)".into(),
            ],
            Self::EmptyStem { suffix, .. } => {
                vec![format!("Put an identifying name before '{suffix}', e.g. Player{suffix}")]
            }
            Self::InvalidExtension { .. } => vec![
                "Extensions start with a dot, e.g. .luau or .lua".into(),
                "Check `luafile config get settings.type`".into(),
            ],
            Self::UnknownTemplate(_) => vec![
                "Available templates: ModuleScript, Client, Server, Knit.Controller, Knit.Service"
                    .into(),
                "Try: luafile list".into(),
            ],
            Self::UnknownConvention(_) => vec!["Use 'fixed' or 'free'".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName
            | Self::InvalidCharacters { .. }
            | Self::MissingRoleSuffix { .. }
            | Self::EmptyStem { .. } => ErrorCategory::Validation,
            Self::InvalidExtension { .. } | Self::UnknownConvention(_) => {
                ErrorCategory::Configuration
            }
            Self::UnknownTemplate(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
}
