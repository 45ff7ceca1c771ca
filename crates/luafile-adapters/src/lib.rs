//! Infrastructure adapters for luafile.
//!
//! This crate implements the ports defined in `luafile-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod opener;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use opener::{EditorOpener, NoopOpener, OpenerError, RecordingOpener};
pub use prompt::{ScriptedAnswer, ScriptedPrompt};
