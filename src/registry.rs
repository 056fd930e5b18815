// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-group verbosity configuration.
//!
//! The registry maps group names to the most detailed [`Level`] that group may
//! emit. Lookups fall back along the group's ancestors and finally to the
//! reserved `all` group, so configuring `core` covers `core/window/status` unless
//! something more specific is set.
//!
//! ```
//! use grouplog::{Level, VerbosityRegistry};
//!
//! let registry = VerbosityRegistry::new();
//! assert_eq!(registry.get_verbosity("core/window"), Level::Info);
//!
//! registry.set_verbosity("core", Level::Debug);
//! assert_eq!(registry.get_verbosity("core/window/status"), Level::Debug);
//! assert_eq!(registry.get_verbosity("lua/init"), Level::Info);
//! ```

use crate::group::lookup_chain;
use crate::level::Level;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/**
Maps verbosity groups to levels.

The backing map is created on the first [`set_verbosity`](Self::set_verbosity);
until then every group resolves to the default. A group that is absent from the
map inherits from its ancestors; absence never means "suppress everything".

The registry is `Sync`, so one instance can be shared through an `Arc` between
the [`crate::Logger`] and whatever parses configuration.
*/
#[derive(Debug, Default)]
pub struct VerbosityRegistry {
    levels: RwLock<Option<HashMap<String, Level>>>,
}

impl VerbosityRegistry {
    pub const fn new() -> Self {
        Self {
            levels: RwLock::new(None),
        }
    }

    /// Sets the verbosity for `group`, replacing any earlier setting.
    pub fn set_verbosity(&self, group: &str, level: Level) {
        let mut levels = self.levels.write().unwrap_or_else(PoisonError::into_inner);
        levels
            .get_or_insert_with(HashMap::new)
            .insert(group.to_string(), level);
    }

    /// Removes the setting for exactly `group`, so it inherits again.
    ///
    /// Returns the level that was configured, if any.
    pub fn clear_verbosity(&self, group: &str) -> Option<Level> {
        let mut levels = self.levels.write().unwrap_or_else(PoisonError::into_inner);
        levels.as_mut().and_then(|map| map.remove(group))
    }

    /// Resolves the verbosity of `group`.
    ///
    /// The most specific configured entry among `group`, its ancestors and `all`
    /// wins. With nothing configured the result is [`Level::Info`].
    pub fn get_verbosity(&self, group: &str) -> Level {
        let levels = self.levels.read().unwrap_or_else(PoisonError::into_inner);
        let Some(map) = levels.as_ref() else {
            return Level::default();
        };
        lookup_chain(group)
            .find_map(|candidate| map.get(candidate).copied())
            .unwrap_or_default()
    }

    /// Whether any verbosity has ever been set.
    pub fn is_initialized(&self) -> bool {
        self.levels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The configured entries, sorted by group name.
    pub fn snapshot(&self) -> Vec<(String, Level)> {
        let levels = self.levels.read().unwrap_or_else(PoisonError::into_inner);
        let mut entries: Vec<_> = levels
            .iter()
            .flatten()
            .map(|(group, level)| (group.clone(), *level))
            .collect();
        entries.sort();
        entries
    }
}
