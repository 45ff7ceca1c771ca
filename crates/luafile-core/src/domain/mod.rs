// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for luafile.
//!
//! This module contains pure naming logic with no I/O. Directory listings,
//! prompts, and writes are reached through ports defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or process calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable data**: The registry is static; entities are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    DirectorySnapshot, NameSuggestion, NamingContext, ResolvedFile, Settings, TemplateDescriptor,
    template::{self as registry, materialize},
};

pub use error::{DomainError, ErrorCategory};

pub use naming::{
    apply_convention, compute_default_suggestion, normalize_extension, resolve_collision,
    validate_candidate_name,
};

pub use value_objects::{Extension, NamingConvention, TemplateId, TemplateKind};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn template_id_parses_correctly() {
        assert_eq!(TemplateId::from_str("ModuleScript").unwrap(), TemplateId::ModuleScript);
        assert_eq!(TemplateId::from_str("client").unwrap(), TemplateId::Client);
        assert_eq!(TemplateId::from_str("Knit.Service").unwrap(), TemplateId::KnitService);
        assert_eq!(TemplateId::from_str("controller").unwrap(), TemplateId::KnitController);
        assert!(TemplateId::from_str("widget").is_err());
    }

    #[test]
    fn template_id_display_round_trips() {
        for id in TemplateId::ALL {
            assert_eq!(TemplateId::from_str(&id.to_string()).unwrap(), id);
        }
    }

    #[test]
    fn only_knit_templates_need_companion_framework() {
        assert!(TemplateId::KnitController.requires_companion_framework());
        assert!(TemplateId::KnitService.requires_companion_framework());
        assert!(!TemplateId::ModuleScript.requires_companion_framework());
        assert!(!TemplateId::Client.requires_companion_framework());
        assert!(!TemplateId::Server.requires_companion_framework());
    }

    #[test]
    fn kind_role_suffixes() {
        assert_eq!(TemplateKind::Controller.role_suffix(), "Controller");
        assert_eq!(TemplateKind::Service.role_suffix(), "Service");
        assert_eq!(TemplateKind::LocalScriptClient.role_suffix(), ".client");
        assert_eq!(TemplateKind::Script.role_suffix(), ".server");
        assert_eq!(TemplateKind::ModuleScript.role_suffix(), "");
    }

    #[test]
    fn extension_requires_leading_dot() {
        assert_eq!(Extension::from_str(".lua").unwrap().as_str(), ".lua");
        assert_eq!(Extension::from_str(" .luau ").unwrap().as_str(), ".luau");
        assert!(Extension::from_str("lua").is_err());
        assert!(Extension::from_str(".").is_err());
        assert!(Extension::from_str("./x").is_err());
        assert!(Extension::from_str("").is_err());
    }

    #[test]
    fn extension_defaults_to_luau() {
        assert_eq!(Extension::default().as_str(), ".luau");
    }

    #[test]
    fn convention_parses_legacy_alias() {
        assert_eq!(NamingConvention::from_str("fixed").unwrap(), NamingConvention::Fixed);
        assert_eq!(NamingConvention::from_str("legacy").unwrap(), NamingConvention::Free);
        assert!(NamingConvention::from_str("loose").is_err());
    }

    // ========================================================================
    // Settings Tests
    // ========================================================================

    #[test]
    fn settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.extension.as_str(), ".luau");
        assert!(settings.companion_framework_enabled);
        assert_eq!(settings.convention, NamingConvention::Fixed);
        assert!(!settings.strict_role_suffix);
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn validator_applies_strict_rule_only_when_asked() {
        let ext = Extension::default();
        assert!(DomainValidator::validate_input("Foo", TemplateKind::Service, &ext, false).is_ok());
        assert!(DomainValidator::validate_input("Foo", TemplateKind::Service, &ext, true).is_err());
        assert_eq!(
            DomainValidator::validate_input(" FooService ", TemplateKind::Service, &ext, true)
                .unwrap(),
            "FooService"
        );
    }

    #[test]
    fn validator_reports_syntax_before_suffix() {
        let ext = Extension::default();
        assert_eq!(
            DomainValidator::validate_input("", TemplateKind::Controller, &ext, true),
            Err(DomainError::EmptyName)
        );
    }

    // ========================================================================
    // Suggestion invariants across all kinds
    // ========================================================================

    #[test]
    fn suggestions_end_with_extension_and_stay_in_bounds() {
        for ext in [".luau", ".lua", ".client.luau"] {
            let ext: Extension = ext.parse().unwrap();
            for descriptor in registry::all() {
                let s = compute_default_suggestion(descriptor.kind, &ext);
                assert!(s.default_name().ends_with(ext.as_str()));
                let span = s.editable();
                assert!(span.start <= span.end && span.end <= s.default_name().len());
            }
        }
    }
}
