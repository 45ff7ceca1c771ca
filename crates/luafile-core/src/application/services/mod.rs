//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a controller here" or "list templates".

pub mod create_file_service;
pub mod template_service;

pub use create_file_service::{CreateFileService, CreateOutcome, CreateRequest};
pub use template_service::{TemplateInfo, TemplateService};
