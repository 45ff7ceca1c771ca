use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Extension, NamingConvention};

/// Configuration snapshot used by one invocation.
///
/// The CLI builds this from its config layers; the core never reads
/// configuration on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub extension: Extension,
    pub companion_framework_enabled: bool,
    pub convention: NamingConvention,
    pub strict_role_suffix: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            extension: Extension::default(),
            companion_framework_enabled: true,
            convention: NamingConvention::default(),
            strict_role_suffix: false,
        }
    }
}

impl Settings {
    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension = extension;
        self
    }

    pub fn with_convention(mut self, convention: NamingConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_companion_framework(mut self, enabled: bool) -> Self {
        self.companion_framework_enabled = enabled;
        self
    }

    pub fn with_strict_role_suffix(mut self, strict: bool) -> Self {
        self.strict_role_suffix = strict;
        self
    }
}
