// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verbosity groups.
//!
//! A group is a `/`-delimited path such as `core/window` or `lua/rc/init`. The
//! first segment is the namespace: `core` for call sites in native source files,
//! `lua` for call sites in scripts. Groups are derived from the location string a
//! call site reports (a source file name), never declared up front.

/// The root group every lookup falls back to.
pub const ALL: &str = "all";

/// Namespace for native call sites.
pub const CORE_NAMESPACE: &str = "core";
/// Namespace for script call sites.
pub const LUA_NAMESPACE: &str = "lua";

const NATIVE_SUFFIXES: &[&str] = &[".c", ".rs"];
const SCRIPT_SUFFIX: &str = ".lua";

/// Derives the verbosity group of a call site from its location identifier.
///
/// ```
/// use grouplog::group::group_from_identifier;
/// assert_eq!(group_from_identifier("foo/bar.c"), "core/foo/bar");
/// assert_eq!(group_from_identifier("./init.lua"), "lua/init");
/// ```
///
/// # Panics
///
/// If `identifier` does not end in exactly one of the native (`.c`, `.rs`) or
/// script (`.lua`) suffixes. Locations are produced by call-site macros and the
/// script engine, so a mismatch means the two sides were built against
/// different conventions.
pub fn group_from_identifier(identifier: &str) -> String {
    let native = NATIVE_SUFFIXES
        .iter()
        .find_map(|suffix| identifier.strip_suffix(suffix));
    let script = identifier.strip_suffix(SCRIPT_SUFFIX);

    match (native, script) {
        (Some(stem), None) => format!("{CORE_NAMESPACE}/{stem}"),
        (None, Some(stem)) => {
            let stem = stem.strip_prefix("./").unwrap_or(stem);
            format!("{LUA_NAMESPACE}/{stem}")
        }
        _ => panic!(
            "log location `{identifier}` must name exactly one native or script source file"
        ),
    }
}

/// Yields the groups consulted when resolving the verbosity of `group`: the group
/// itself, each ancestor obtained by dropping the last segment, then [`ALL`].
///
/// The input is borrowed and left untouched; every item is a prefix slice of it
/// except the final `"all"`.
///
/// ```
/// use grouplog::group::lookup_chain;
/// let chain: Vec<_> = lookup_chain("core/window/status").collect();
/// assert_eq!(chain, ["core/window/status", "core/window", "core", "all"]);
/// ```
pub fn lookup_chain(group: &str) -> impl Iterator<Item = &str> {
    let mut next = Some(group);
    std::iter::from_fn(move || {
        let current = next?;
        next = match current.rfind('/') {
            Some(slash) => Some(&current[..slash]),
            None if current == ALL => None,
            None => Some(ALL),
        };
        Some(current)
    })
}
