use std::ops::Range;

use serde::Serialize;

use crate::domain::value_objects::{Extension, TemplateKind};

/// A default file name plus the span the user is expected to overwrite.
///
/// Invariant: `editable.start <= editable.end <= default_name.len()`, and
/// both ends fall on character boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSuggestion {
    default_name: String,
    editable: Range<usize>,
}

impl NameSuggestion {
    /// Build the suggestion for a kind under the configured extension.
    ///
    /// | kind              | default name                 | editable      |
    /// |-------------------|------------------------------|---------------|
    /// | Controller        | `NameController<ext>`        | `Name`        |
    /// | Service           | `NameService<ext>`           | `Name`        |
    /// | LocalScriptClient | `LocalScript.client<ext>`    | `LocalScript` |
    /// | Script            | `Script.server<ext>`         | `Script`      |
    /// | ModuleScript      | `ModuleScript<ext>`          | all but ext   |
    pub fn for_kind(kind: TemplateKind, extension: &Extension) -> Self {
        match kind {
            TemplateKind::Controller | TemplateKind::Service => {
                const PLACEHOLDER: &str = "Name";
                Self {
                    default_name: format!("{PLACEHOLDER}{}{extension}", kind.as_str()),
                    editable: 0..PLACEHOLDER.len(),
                }
            }
            TemplateKind::LocalScriptClient | TemplateKind::Script => {
                let default_name = format!("{}{}{extension}", kind.as_str(), kind.role_suffix());
                let end = default_name.find('.').unwrap_or(default_name.len());
                Self {
                    default_name,
                    editable: 0..end,
                }
            }
            TemplateKind::ModuleScript => {
                let default_name = format!("{}{extension}", kind.as_str());
                let end = default_name.len() - extension.len();
                Self {
                    default_name,
                    editable: 0..end,
                }
            }
        }
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn editable(&self) -> Range<usize> {
        self.editable.clone()
    }

    /// The pre-selected substring, e.g. `Name` in `NameService.luau`.
    pub fn editable_text(&self) -> &str {
        &self.default_name[self.editable.clone()]
    }

    /// Text before the editable span (empty for every built-in kind).
    pub fn prefix(&self) -> &str {
        &self.default_name[..self.editable.start]
    }

    /// Fixed decorations after the editable span, e.g. `Service.luau`.
    pub fn suffix(&self) -> &str {
        &self.default_name[self.editable.end..]
    }

    /// Replace the editable span with `typed`, keeping the decorations.
    ///
    /// This is what typing over a pre-selected range produces.
    pub fn splice(&self, typed: &str) -> String {
        format!("{}{typed}{}", self.prefix(), self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luau() -> Extension {
        Extension::default()
    }

    #[test]
    fn controller_selects_placeholder_only() {
        let s = NameSuggestion::for_kind(TemplateKind::Controller, &luau());
        assert_eq!(s.default_name(), "NameController.luau");
        assert_eq!(s.editable(), 0..4);
        assert_eq!(s.editable_text(), "Name");
    }

    #[test]
    fn service_span_ignores_suffix_length() {
        let s = NameSuggestion::for_kind(TemplateKind::Service, &".lua".parse().unwrap());
        assert_eq!(s.default_name(), "NameService.lua");
        assert_eq!(s.editable(), 0..4);
    }

    #[test]
    fn client_selects_before_first_dot() {
        let s = NameSuggestion::for_kind(TemplateKind::LocalScriptClient, &luau());
        assert_eq!(s.default_name(), "LocalScript.client.luau");
        assert_eq!(s.editable_text(), "LocalScript");
    }

    #[test]
    fn server_selects_script() {
        let s = NameSuggestion::for_kind(TemplateKind::Script, &luau());
        assert_eq!(s.default_name(), "Script.server.luau");
        assert_eq!(s.editable_text(), "Script");
    }

    #[test]
    fn module_selects_everything_but_extension() {
        let s = NameSuggestion::for_kind(TemplateKind::ModuleScript, &luau());
        assert_eq!(s.default_name(), "ModuleScript.luau");
        assert_eq!(s.editable_text(), "ModuleScript");
        assert_eq!(s.suffix(), ".luau");
    }

    #[test]
    fn splice_keeps_decorations() {
        let s = NameSuggestion::for_kind(TemplateKind::Service, &luau());
        assert_eq!(s.splice("Data"), "DataService.luau");

        let s = NameSuggestion::for_kind(TemplateKind::LocalScriptClient, &luau());
        assert_eq!(s.splice("Foo"), "Foo.client.luau");
    }
}
