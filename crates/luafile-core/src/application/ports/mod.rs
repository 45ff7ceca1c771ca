//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `luafile-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory listing, stat, exclusive writes
//!   - `NamePrompt`: input collection with a pre-selected span and validator
//!   - `DocumentOpener`: opening the created file
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The five create commands in the CLI, served by `CreateFileService`)

pub mod output;

pub use output::{DocumentOpener, Filesystem, NamePrompt, PromptRequest};
