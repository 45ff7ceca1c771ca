//! Document openers.
//!
//! Shows the created file to the user by handing it to an external editor.
//! The editor command comes from configuration, then `$VISUAL`, then
//! `$EDITOR`.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

use luafile_core::{
    application::ports::DocumentOpener,
    error::{LuafileError, LuafileResult},
};
use tracing::{debug, info};

/// Opener errors
#[derive(Debug, thiserror::Error)]
pub enum OpenerError {
    #[error("No editor found. Set editor.command, $VISUAL or $EDITOR.")]
    NoEditor,

    #[error("Failed to launch editor '{editor}': {reason}")]
    Launch { editor: String, reason: String },

    #[error("Editor exited with status: {0}")]
    ExitStatus(String),
}

impl From<OpenerError> for LuafileError {
    fn from(e: OpenerError) -> Self {
        LuafileError::Configuration {
            message: e.to_string(),
        }
    }
}

/// Opens files in the user's editor and waits for it to exit.
#[derive(Debug, Clone, Default)]
pub struct EditorOpener {
    command: Option<String>,
}

impl EditorOpener {
    /// `command` overrides the environment; it may carry arguments
    /// (`"code --wait"`).
    pub fn new(command: Option<String>) -> Self {
        Self {
            command: command.filter(|c| !c.trim().is_empty()),
        }
    }

    /// The editor that [`DocumentOpener::open`] would run.
    pub fn editor(&self) -> Option<String> {
        Self::resolve_editor(self.command.as_deref(), |var| env::var(var).ok())
    }

    fn resolve_editor(
        configured: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<String> {
        if let Some(command) = configured {
            return Some(command.to_string());
        }
        ["VISUAL", "EDITOR"]
            .into_iter()
            .filter_map(lookup)
            .find(|editor| !editor.trim().is_empty())
    }

    fn run(editor: &str, path: &Path) -> Result<(), OpenerError> {
        let mut parts = editor.split_whitespace();
        let program = parts.next().ok_or(OpenerError::NoEditor)?;

        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|e| OpenerError::Launch {
                editor: editor.to_string(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(OpenerError::ExitStatus(status.to_string()))
        }
    }
}

impl DocumentOpener for EditorOpener {
    fn open(&self, path: &Path) -> LuafileResult<()> {
        let editor = self.editor().ok_or(OpenerError::NoEditor)?;
        info!(editor = %editor, path = %path.display(), "Opening file");
        Self::run(&editor, path)?;
        Ok(())
    }
}

/// Opener that does nothing (`--no-open`, `--dry-run`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOpener;

impl DocumentOpener for NoopOpener {
    fn open(&self, path: &Path) -> LuafileResult<()> {
        debug!(path = %path.display(), "Opening skipped");
        Ok(())
    }
}

/// Opener that records every path it is asked to open (testing).
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<PathBuf>>>,
    fail: bool,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the path, then report a failure.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

impl DocumentOpener for RecordingOpener {
    fn open(&self, path: &Path) -> LuafileResult<()> {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(path.to_path_buf());
        }
        if self.fail {
            return Err(OpenerError::ExitStatus("exit status: 1".into()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_command_wins() {
        let editor = EditorOpener::resolve_editor(Some("code --wait"), |_| Some("vim".into()));
        assert_eq!(editor.as_deref(), Some("code --wait"));
    }

    #[test]
    fn visual_before_editor() {
        let editor = EditorOpener::resolve_editor(None, |var| match var {
            "VISUAL" => Some("hx".into()),
            "EDITOR" => Some("vi".into()),
            _ => None,
        });
        assert_eq!(editor.as_deref(), Some("hx"));
    }

    #[test]
    fn blank_variables_are_skipped() {
        let editor = EditorOpener::resolve_editor(None, |var| match var {
            "VISUAL" => Some("  ".into()),
            "EDITOR" => Some("nano".into()),
            _ => None,
        });
        assert_eq!(editor.as_deref(), Some("nano"));
        assert_eq!(EditorOpener::resolve_editor(None, |_| None), None);
    }

    #[test]
    fn blank_configured_command_is_ignored() {
        let opener = EditorOpener::new(Some("   ".into()));
        assert!(opener.command.is_none());
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let err = EditorOpener::run("luafile-no-such-editor-xyz", Path::new("a.luau")).unwrap_err();
        assert!(matches!(err, OpenerError::Launch { .. }));
    }

    #[test]
    fn recording_opener_keeps_paths() {
        let opener = RecordingOpener::new();
        opener.open(Path::new("/ws/A.luau")).unwrap();
        assert_eq!(opener.opened(), vec![PathBuf::from("/ws/A.luau")]);

        let failing = RecordingOpener::failing();
        assert!(failing.open(Path::new("/ws/B.luau")).is_err());
        assert_eq!(failing.opened().len(), 1);
    }
}
