//! Template registry.
//!
//! The registry is a fixed, compile-time table mapping each [`TemplateId`] to
//! a [`TemplateDescriptor`]. It has no behaviour beyond lookup: the kind space
//! is closed, so lookup is total and never fails.
//!
//! ```text
//! TemplateId ──lookup──▶ TemplateDescriptor { kind, boilerplate }
//!   Client                 LocalScriptClient, "-- Client script\n\n"
//! ```

use crate::domain::value_objects::{TemplateId, TemplateKind};

/// Body of a new ModuleScript.
pub const MODULE_BOILERPLATE: &str = "local module = {}\n\nreturn module\n";
/// Body of a new client script.
pub const CLIENT_BOILERPLATE: &str = "-- Client script\n\n";
/// Body of a new server script.
pub const SERVER_BOILERPLATE: &str = "-- Server script\n\n";
/// Knit controllers and services start empty.
pub const KNIT_BOILERPLATE: &str = "";
/// Marker for kinds outside the closed set. Unreachable through the
/// registry; kept as the documented fallback body.
pub const GENERIC_BOILERPLATE: &str = "-- Lua script\n\n";

/// Immutable description of one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub id: TemplateId,
    pub kind: TemplateKind,
    pub boilerplate: &'static str,
}

impl TemplateDescriptor {
    const fn new(id: TemplateId, kind: TemplateKind, boilerplate: &'static str) -> Self {
        Self {
            id,
            kind,
            boilerplate,
        }
    }

    /// Short human description for listings.
    pub const fn summary(&self) -> &'static str {
        match self.kind {
            TemplateKind::ModuleScript => "Module returning a table",
            TemplateKind::LocalScriptClient => "Client-side LocalScript",
            TemplateKind::Script => "Server-side Script",
            TemplateKind::Controller => "Knit controller (client)",
            TemplateKind::Service => "Knit service (server)",
        }
    }
}

static REGISTRY: [TemplateDescriptor; 5] = [
    TemplateDescriptor::new(
        TemplateId::ModuleScript,
        TemplateKind::ModuleScript,
        MODULE_BOILERPLATE,
    ),
    TemplateDescriptor::new(
        TemplateId::Client,
        TemplateKind::LocalScriptClient,
        CLIENT_BOILERPLATE,
    ),
    TemplateDescriptor::new(TemplateId::Server, TemplateKind::Script, SERVER_BOILERPLATE),
    TemplateDescriptor::new(
        TemplateId::KnitController,
        TemplateKind::Controller,
        KNIT_BOILERPLATE,
    ),
    TemplateDescriptor::new(
        TemplateId::KnitService,
        TemplateKind::Service,
        KNIT_BOILERPLATE,
    ),
];

/// Look up the descriptor for a template id.
pub fn lookup(id: TemplateId) -> &'static TemplateDescriptor {
    match id {
        TemplateId::ModuleScript => &REGISTRY[0],
        TemplateId::Client => &REGISTRY[1],
        TemplateId::Server => &REGISTRY[2],
        TemplateId::KnitController => &REGISTRY[3],
        TemplateId::KnitService => &REGISTRY[4],
    }
}

/// Every registered template, in declaration order.
pub fn all() -> &'static [TemplateDescriptor] {
    &REGISTRY
}

/// Boilerplate body for a template kind.
pub const fn materialize(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::ModuleScript => MODULE_BOILERPLATE,
        TemplateKind::LocalScriptClient => CLIENT_BOILERPLATE,
        TemplateKind::Script => SERVER_BOILERPLATE,
        TemplateKind::Controller | TemplateKind::Service => KNIT_BOILERPLATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_consistent_with_table() {
        for id in TemplateId::ALL {
            assert_eq!(lookup(id).id, id);
        }
    }

    #[test]
    fn registry_maps_ids_to_kinds() {
        assert_eq!(lookup(TemplateId::ModuleScript).kind, TemplateKind::ModuleScript);
        assert_eq!(lookup(TemplateId::Client).kind, TemplateKind::LocalScriptClient);
        assert_eq!(lookup(TemplateId::Server).kind, TemplateKind::Script);
        assert_eq!(lookup(TemplateId::KnitController).kind, TemplateKind::Controller);
        assert_eq!(lookup(TemplateId::KnitService).kind, TemplateKind::Service);
    }

    #[test]
    fn boilerplate_matches_materialize() {
        for descriptor in all() {
            assert_eq!(descriptor.boilerplate, materialize(descriptor.kind));
        }
    }

    #[test]
    fn knit_templates_start_empty() {
        assert!(lookup(TemplateId::KnitController).boilerplate.is_empty());
        assert!(lookup(TemplateId::KnitService).boilerplate.is_empty());
    }

    #[test]
    fn module_boilerplate_returns_table() {
        assert_eq!(
            materialize(TemplateKind::ModuleScript),
            "local module = {}\n\nreturn module\n"
        );
    }
}
