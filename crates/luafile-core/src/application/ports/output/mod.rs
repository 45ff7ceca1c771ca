//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the host: a way to
//! look at and write into a directory, a way to ask the user for a name, and
//! a way to open the result. The `luafile-adapters` crate and the CLI provide
//! implementations.

use std::ops::Range;
use std::path::Path;

use crate::domain::{
    DirectorySnapshot, DomainError, DomainValidator, Extension, NameSuggestion, Settings,
    TemplateDescriptor, TemplateKind, naming,
};
use crate::error::LuafileResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `luafile_adapters::filesystem::LocalFilesystem` (production)
/// - `luafile_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Whether `path` is a directory. Fails if `path` cannot be stat'ed.
    fn is_dir(&self, path: &Path) -> LuafileResult<bool>;

    /// Names of the entries directly inside `dir`.
    fn list_entries(&self, dir: &Path) -> LuafileResult<DirectorySnapshot>;

    /// Create `path` with `content`. Must fail rather than overwrite an
    /// existing file, and must not leave a partial file behind on failure.
    fn write_new_file(&self, path: &Path, content: &str) -> LuafileResult<()>;
}

/// Port for showing a freshly created file to the user.
///
/// Implemented by:
/// - `luafile_adapters::opener::EditorOpener` (spawns the configured editor)
/// - `luafile_adapters::opener::NoopOpener` (`--no-open`)
/// - `luafile_adapters::opener::RecordingOpener` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait DocumentOpener: Send + Sync {
    fn open(&self, path: &Path) -> LuafileResult<()>;
}

/// Port for collecting the file name from the user.
///
/// Returns `Ok(None)` when the user dismisses the prompt. Implementations
/// must reject submission while [`PromptRequest::validate`] fails.
///
/// Implemented by:
/// - `luafile_adapters::prompt::ScriptedPrompt` (`--yes`, `--name`, tests)
/// - `luafile-cli`'s `DialoguerPrompt` (interactive terminal)
#[cfg_attr(test, mockall::automock)]
pub trait NamePrompt {
    fn prompt(&self, request: &PromptRequest) -> LuafileResult<Option<String>>;
}

/// Everything an input collector needs to ask for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub message: String,
    pub suggestion: NameSuggestion,
    pub kind: TemplateKind,
    pub extension: Extension,
    pub strict_role_suffix: bool,
}

impl PromptRequest {
    pub fn new(descriptor: &TemplateDescriptor, settings: &Settings) -> Self {
        Self {
            message: format!("Enter the name for your {}", descriptor.kind),
            suggestion: naming::compute_default_suggestion(descriptor.kind, &settings.extension),
            kind: descriptor.kind,
            extension: settings.extension.clone(),
            strict_role_suffix: settings.strict_role_suffix,
        }
    }

    /// Pre-filled value.
    pub fn default_value(&self) -> &str {
        self.suggestion.default_name()
    }

    /// Pre-selected byte range of [`Self::default_value`].
    pub fn selection(&self) -> Range<usize> {
        self.suggestion.editable()
    }

    /// Validator to run on every keystroke or submit.
    pub fn validate(&self, value: &str) -> Result<String, DomainError> {
        DomainValidator::validate_input(value, self.kind, &self.extension, self.strict_role_suffix)
    }
}
