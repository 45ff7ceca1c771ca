use crate::domain::{
    error::DomainError,
    naming,
    value_objects::{Extension, TemplateKind},
};

/// Centralized domain validation.
///
/// The prompt validator and the service both go through here, so a name
/// accepted while typing is never rejected later for a syntactic reason.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_candidate_name(raw: &str) -> Result<String, DomainError> {
        naming::validate_candidate_name(raw)
    }

    pub fn validate_role_suffix(
        name: &str,
        kind: TemplateKind,
        extension: &Extension,
        strict: bool,
    ) -> Result<(), DomainError> {
        if strict {
            naming::check_role_suffix(name, kind, extension)
        } else {
            Ok(())
        }
    }

    /// Full per-keystroke check: syntax first, then the optional suffix rule.
    pub fn validate_input(
        raw: &str,
        kind: TemplateKind,
        extension: &Extension,
        strict: bool,
    ) -> Result<String, DomainError> {
        let name = Self::validate_candidate_name(raw)?;
        Self::validate_role_suffix(&name, kind, extension, strict)?;
        Ok(name)
    }
}
