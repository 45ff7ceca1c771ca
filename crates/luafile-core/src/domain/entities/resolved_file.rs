use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::{Extension, TemplateKind};

/// Where and under which extension a single invocation creates its file.
///
/// Built once per invocation; the extension is the snapshot value taken when
/// the invocation started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingContext {
    pub extension: Extension,
    pub target_directory: PathBuf,
}

impl NamingContext {
    pub fn new(extension: Extension, target_directory: impl Into<PathBuf>) -> Self {
        Self {
            extension,
            target_directory: target_directory.into(),
        }
    }
}

/// Final output of name resolution, ready for materialization.
///
/// Contains no business logic, only data. Ownership passes to the writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFile {
    pub final_path: PathBuf,
    pub final_name: String,
    pub content: String,
    pub kind: TemplateKind,
}

impl ResolvedFile {
    pub fn new(
        directory: &Path,
        final_name: impl Into<String>,
        content: impl Into<String>,
        kind: TemplateKind,
    ) -> Self {
        let final_name = final_name.into();
        Self {
            final_path: directory.join(&final_name),
            final_name,
            content: content.into(),
            kind,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_path_joins_directory_and_name() {
        let file = ResolvedFile::new(
            Path::new("/work/src"),
            "Foo.luau",
            "",
            TemplateKind::Controller,
        );
        assert_eq!(file.final_path, PathBuf::from("/work/src/Foo.luau"));
        assert!(file.is_empty());
    }
}
