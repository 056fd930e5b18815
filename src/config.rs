// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verbosity directives.
//!
//! Command line options and configuration files describe verbosity as a comma
//! separated list of directives:
//!
//! - `level` sets the `all` group, e.g. `warn`;
//! - `group=level` sets one group, e.g. `core/window=debug`.
//!
//! ```
//! use grouplog::config::apply_verbosity_directives;
//! use grouplog::{Level, VerbosityRegistry};
//!
//! let registry = VerbosityRegistry::new();
//! apply_verbosity_directives(&registry, "warn,core/window=debug").unwrap();
//! assert_eq!(registry.get_verbosity("core/window/tabs"), Level::Debug);
//! assert_eq!(registry.get_verbosity("lua/init"), Level::Warn);
//! ```

use crate::error::Error;
use crate::group::ALL;
use crate::level::Level;
use crate::registry::VerbosityRegistry;
use serde::{Deserialize, Serialize};

/// One parsed directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerbosityDirective {
    pub group: String,
    pub level: Level,
}

impl VerbosityDirective {
    /// Parses a single `level` or `group=level` item.
    pub fn parse(item: &str) -> Result<Self, Error> {
        let invalid = |reason| Error::InvalidDirective {
            directive: item.to_string(),
            reason,
        };
        match item.split_once('=') {
            None if item.is_empty() => Err(invalid("empty directive")),
            None => Ok(Self {
                group: ALL.to_string(),
                level: Level::from_name(item)?,
            }),
            Some(("", _)) => Err(invalid("missing group before `=`")),
            Some((group, level)) => Ok(Self {
                group: group.to_string(),
                level: Level::from_name(level)?,
            }),
        }
    }
}

/// Parses a comma separated directive list.
///
/// Either every item parses or an error is returned; there is no partial result.
pub fn parse_verbosity_directives(value: &str) -> Result<Vec<VerbosityDirective>, Error> {
    value.split(',').map(VerbosityDirective::parse).collect()
}

/// Parses `value` and, if every item is valid, applies the directives to
/// `registry` in order. Later directives for the same group win.
pub fn apply_verbosity_directives(registry: &VerbosityRegistry, value: &str) -> Result<(), Error> {
    for directive in parse_verbosity_directives(value)? {
        registry.set_verbosity(&directive.group, directive.level);
    }
    Ok(())
}

// Level travels by name in configuration files.
impl Serialize for Level {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Level::from_name(&name).map_err(serde::de::Error::custom)
    }
}
