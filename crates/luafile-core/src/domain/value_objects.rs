//! Domain value objects: TemplateId, TemplateKind, Extension, NamingConvention.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. The
//! only logic here is string representation, parsing, and the per-kind
//! naming decorations (`role_suffix`). The naming algorithm itself lives in
//! `naming.rs`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TemplateId ───────────────────────────────────────────────────────────────

/// The identifier a caller uses to request a template.
///
/// This is the user-facing handle (command names, `list` output). Each id
/// maps to exactly one [`TemplateKind`] through the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateId {
    ModuleScript,
    Client,
    Server,
    #[serde(rename = "Knit.Controller")]
    KnitController,
    #[serde(rename = "Knit.Service")]
    KnitService,
}

impl TemplateId {
    pub const ALL: [Self; 5] = [
        Self::ModuleScript,
        Self::Client,
        Self::Server,
        Self::KnitController,
        Self::KnitService,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ModuleScript => "ModuleScript",
            Self::Client => "Client",
            Self::Server => "Server",
            Self::KnitController => "Knit.Controller",
            Self::KnitService => "Knit.Service",
        }
    }

    /// Whether this template belongs to the Knit companion framework and is
    /// therefore gated by `Settings::companion_framework_enabled`.
    pub const fn requires_companion_framework(&self) -> bool {
        matches!(self, Self::KnitController | Self::KnitService)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modulescript" | "module" => Ok(Self::ModuleScript),
            "client" | "localscript" => Ok(Self::Client),
            "server" | "script" => Ok(Self::Server),
            "knit.controller" | "controller" => Ok(Self::KnitController),
            "knit.service" | "service" => Ok(Self::KnitService),
            _ => Err(DomainError::UnknownTemplate(s.to_string())),
        }
    }
}

// ── TemplateKind ─────────────────────────────────────────────────────────────

/// The closed set of file kinds the registry can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateKind {
    ModuleScript,
    LocalScriptClient,
    Script,
    Controller,
    Service,
}

impl TemplateKind {
    /// The kind name shown to users and used to build default names.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ModuleScript => "ModuleScript",
            Self::LocalScriptClient => "LocalScript",
            Self::Script => "Script",
            Self::Controller => "Controller",
            Self::Service => "Service",
        }
    }

    /// Structural decoration that follows the user-chosen part of a name.
    ///
    /// Empty for kinds without one. Numeric disambiguators are inserted
    /// before this suffix, never after it.
    pub const fn role_suffix(&self) -> &'static str {
        match self {
            Self::Controller => "Controller",
            Self::Service => "Service",
            Self::LocalScriptClient => ".client",
            Self::Script => ".server",
            Self::ModuleScript => "",
        }
    }

    /// Role suffixes that strict mode enforces (the Knit pair only).
    pub const fn requires_strict_suffix(&self) -> bool {
        matches!(self, Self::Controller | Self::Service)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Extension ────────────────────────────────────────────────────────────────

/// A file extension including its leading dot, e.g. `.luau`.
///
/// Invariant: starts with `.` and is followed by at least one character from
/// the filename character set `[A-Za-z0-9._-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Extension(String);

impl Extension {
    pub const DEFAULT: &'static str = ".luau";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Extension {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Extension {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Extension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = |reason: &str| DomainError::InvalidExtension {
            extension: s.to_string(),
            reason: reason.to_string(),
        };

        let Some(rest) = trimmed.strip_prefix('.') else {
            return Err(invalid("must start with '.'"));
        };
        if rest.is_empty() {
            return Err(invalid("nothing follows the dot"));
        }
        if !rest
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(invalid("only letters, digits, '.', '_' and '-' are allowed"));
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for Extension {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Extension> for String {
    fn from(value: Extension) -> Self {
        value.0
    }
}

// ── NamingConvention ─────────────────────────────────────────────────────────

/// How user edits interact with the role decorations of a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingConvention {
    /// Role suffixes (`Controller`, `Service`, `.client`, `.server`) are
    /// re-attached when an edit drops them.
    #[default]
    Fixed,
    /// Legacy: the whole name is freely editable and used as typed.
    #[serde(alias = "legacy")]
    Free,
}

impl NamingConvention {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Free => "free",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingConvention {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "free" | "legacy" => Ok(Self::Free),
            other => Err(DomainError::UnknownConvention(other.to_string())),
        }
    }
}
