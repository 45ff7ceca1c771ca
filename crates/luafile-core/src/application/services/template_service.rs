//! Template Service - template catalog queries.
//!
//! Separated from CreateFileService for single responsibility.

use serde::Serialize;

use crate::{
    application::SharedSettings,
    domain::{TemplateDescriptor, TemplateId, TemplateKind, naming, registry},
    error::LuafileResult,
};

/// Template metadata for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub kind: TemplateKind,
    pub description: &'static str,
    /// What the prompt would pre-fill under the current settings.
    pub default_name: String,
    /// False when the template needs the companion framework and it is off.
    pub enabled: bool,
}

/// Service for template catalog operations.
pub struct TemplateService {
    settings: SharedSettings,
}

impl TemplateService {
    pub fn new(settings: SharedSettings) -> Self {
        Self { settings }
    }

    /// Get a template by ID.
    pub fn get(&self, id: TemplateId) -> &'static TemplateDescriptor {
        registry::lookup(id)
    }

    /// List all templates in registry order.
    pub fn list(&self) -> LuafileResult<Vec<TemplateInfo>> {
        let settings = self.settings.snapshot()?;

        Ok(registry::all()
            .iter()
            .map(|descriptor| TemplateInfo {
                id: descriptor.id,
                kind: descriptor.kind,
                description: descriptor.summary(),
                default_name: naming::compute_default_suggestion(
                    descriptor.kind,
                    &settings.extension,
                )
                .default_name()
                .to_string(),
                enabled: !descriptor.id.requires_companion_framework()
                    || settings.companion_framework_enabled,
            })
            .collect())
    }
}
