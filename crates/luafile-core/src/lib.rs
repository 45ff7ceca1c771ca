//! luafile Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the luafile
//! Luau/Lua file scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           luafile-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (CreateFileService, TemplateService)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Prompt, Opener)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     luafile-adapters (Infrastructure)   │
//! │ (LocalFilesystem, ScriptedPrompt, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Registry, Naming, NameSuggestion)     │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use luafile_core::{
//!     application::{CreateFileService, CreateRequest, SharedSettings},
//!     domain::TemplateId,
//! };
//!
//! // 1. Build the request
//! let request = CreateRequest::new(TemplateId::KnitService).with_workspace_root("./src");
//!
//! // 2. Use application service (with injected adapters)
//! let service = CreateFileService::new(filesystem, prompt, opener, SharedSettings::default());
//! service.create(&request)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CreateFileService, CreateOutcome, CreateRequest, SharedSettings, TemplateInfo,
        TemplateService,
        ports::{DocumentOpener, Filesystem, NamePrompt, PromptRequest},
    };
    pub use crate::domain::{
        DirectorySnapshot, Extension, NameSuggestion, NamingConvention, ResolvedFile, Settings,
        TemplateDescriptor, TemplateId, TemplateKind,
    };
    pub use crate::error::{LuafileError, LuafileResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
