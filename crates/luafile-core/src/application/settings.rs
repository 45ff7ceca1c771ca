//! Process-wide settings cell.
//!
//! The host updates it when its configuration changes; every invocation
//! reads it exactly once, at start, and works on that snapshot.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::{application::ApplicationError, domain::Settings, error::LuafileResult};

/// Thread-safe handle to the current [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<Settings>>,
}

impl SharedSettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Clone of the current settings.
    pub fn snapshot(&self) -> LuafileResult<Settings> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::SettingsLockError)?;
        Ok(inner.clone())
    }

    /// Replace the settings. Invocations already running keep their snapshot.
    pub fn update(&self, settings: Settings) -> LuafileResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SettingsLockError)?;
        debug!(
            extension = %settings.extension,
            knit = settings.companion_framework_enabled,
            convention = %settings.convention,
            "Settings updated"
        );
        *inner = settings;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_detached_from_later_updates() {
        let shared = SharedSettings::default();
        let before = shared.snapshot().unwrap();

        shared
            .update(Settings::default().with_extension(".lua".parse().unwrap()))
            .unwrap();

        assert_eq!(before.extension.as_str(), ".luau");
        assert_eq!(shared.snapshot().unwrap().extension.as_str(), ".lua");
    }

    #[test]
    fn clones_share_state() {
        let shared = SharedSettings::default();
        let other = shared.clone();
        other
            .update(Settings::default().with_companion_framework(false))
            .unwrap();
        assert!(!shared.snapshot().unwrap().companion_framework_enabled);
    }
}
