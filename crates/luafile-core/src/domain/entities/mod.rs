pub mod resolved_file;
pub mod settings;
pub mod snapshot;
pub mod suggestion;
pub mod template;

pub use resolved_file::{NamingContext, ResolvedFile};
pub use settings::Settings;
pub use snapshot::DirectorySnapshot;
pub use suggestion::NameSuggestion;
pub use template::TemplateDescriptor;
