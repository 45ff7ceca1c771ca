//! Application layer for luafile.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CreateFileService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Settings**: The shared settings cell snapshotted per invocation
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All naming rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export main services
pub use services::{
    CreateFileService, CreateOutcome, CreateRequest,
    TemplateInfo, // DTO for template metadata
    TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentOpener, Filesystem, NamePrompt, PromptRequest};

pub use error::ApplicationError;
pub use settings::SharedSettings;
