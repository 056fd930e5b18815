// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log levels.
//!
//! Every fact about a level (its variant, its configuration name, the single
//! character printed in front of the line, and the terminal style) is written
//! down exactly once in the `levels!` invocation below. The enum, the name
//! parser and the style lookups are all generated from that one list, so adding
//! or reordering a level cannot leave them out of sync.

use crate::ansi;
use crate::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

macro_rules! levels {
    ($($(#[$meta:meta])* $variant:ident => $name:literal, $prefix:literal, $style:expr;)+) => {
        /// Verbosity of a log call, from most severe to most detailed.
        ///
        /// Ordering follows verbosity: `Fatal < Error < ... < Debug`. A call at
        /// level `l` is emitted when `l <= verbosity` of its group.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub enum Level {
            $($(#[$meta])* $variant,)+
        }

        impl Level {
            /// All levels paired with their configuration names, in verbosity order.
            pub const ALL: &'static [(&'static str, Level)] = &[$(($name, Level::$variant),)+];

            /// The configuration name, e.g. `"warn"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Level::$variant => $name,)+
                }
            }

            /// Uppercase character printed after the timestamp.
            pub const fn prefix_char(self) -> char {
                match self {
                    $(Level::$variant => $prefix,)+
                }
            }

            /// ANSI style used when the destination is a terminal. Empty for no color.
            pub const fn style(self) -> &'static str {
                match self {
                    $(Level::$variant => $style,)+
                }
            }
        }
    };
}

levels! {
    /// Unrecoverable. Emitting a fatal line terminates the process.
    Fatal => "fatal", 'F', ansi::BOLD_BG_RED;
    Error => "error", 'E', ansi::RED;
    Warn => "warn", 'W', ansi::YELLOW;
    /// Default verbosity for every group.
    #[default]
    Info => "info", 'I', "";
    Verbose => "verbose", 'V', "";
    Debug => "debug", 'D', "";
}

impl Level {
    /// Looks up a level by its exact, case-sensitive name.
    ///
    /// This is the validation path for user supplied verbosity settings.
    ///
    /// ```
    /// use grouplog::Level;
    /// assert_eq!(Level::from_name("warn").unwrap(), Level::Warn);
    /// assert!(Level::from_name("WARN").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Level, Error> {
        Level::ALL
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, level)| *level)
            .ok_or_else(|| Error::UnknownLevel(name.to_string()))
    }

    /// Converts the integer form used on the wire back into a level.
    pub fn from_index(index: i64) -> Option<Level> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Level::ALL.get(i))
            .map(|(_, level)| *level)
    }

    /// The integer form used on the wire.
    pub const fn index(self) -> i64 {
        self as i64
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_name(s)
    }
}

/*
Boilerplate notes.

Copy, Eq, Ord and Hash are all natural for a fieldless enum, and Ord carries the
verbosity semantics the filter relies on.
Default is Info, the level every unconfigured group resolves to.
Display prints the configuration name so that parse(display(x)) == x.
From<i64> is not implemented since not every integer is a level; use from_index.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_verbosity() {
        assert!(Level::Fatal < Level::Error);
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Info < Level::Verbose);
        assert!(Level::Verbose < Level::Debug);
    }

    #[test]
    fn table_matches_discriminants() {
        for (i, (name, level)) in Level::ALL.iter().enumerate() {
            assert_eq!(level.index(), i as i64);
            assert_eq!(level.name(), *name);
            assert_eq!(Level::from_index(i as i64), Some(*level));
        }
        assert_eq!(Level::from_index(-1), None);
        assert_eq!(Level::from_index(Level::ALL.len() as i64), None);
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert!(matches!(
            "bogus".parse::<Level>(),
            Err(Error::UnknownLevel(name)) if name == "bogus"
        ));
        assert!("Info".parse::<Level>().is_err());
        assert!(" info".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn default_is_info() {
        assert_eq!(Level::default(), Level::Info);
    }

    #[test]
    fn prefixes_and_styles() {
        let prefixes: String = Level::ALL.iter().map(|(_, l)| l.prefix_char()).collect();
        assert_eq!(prefixes, "FEWIVD");
        assert_eq!(Level::Error.style(), ansi::RED);
        assert_eq!(Level::Warn.style(), ansi::YELLOW);
        assert_eq!(Level::Fatal.style(), ansi::BOLD_BG_RED);
        assert!(Level::Info.style().is_empty());
        assert!(Level::Debug.style().is_empty());
    }
}
