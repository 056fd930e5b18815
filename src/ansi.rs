// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal styling helpers.

use regex::Regex;
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const BOLD_BG_RED: &str = "\x1b[1;41m";

static ESCAPES: OnceLock<Regex> = OnceLock::new();

fn escapes() -> &'static Regex {
    ESCAPES.get_or_init(|| {
        // CSI sequences, OSC strings terminated by BEL or ST, then two-byte escapes.
        Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)|\x1b[@-Z\\-_]")
            .expect("ANSI escape pattern is valid")
    })
}

/// Removes ANSI escape sequences from `text`.
///
/// ```
/// assert_eq!(grouplog::ansi::strip_ansi_escapes("\x1b[31mred\x1b[0m"), "red");
/// ```
pub fn strip_ansi_escapes(text: &str) -> String {
    if !text.contains('\x1b') {
        return text.to_string();
    }
    escapes().replace_all(text, "").into_owned()
}

/// Whether the process's stderr is attached to a terminal.
#[cfg(not(target_arch = "wasm32"))]
pub fn stderr_is_terminal() -> bool {
    use is_terminal::IsTerminal;
    std::io::stderr().is_terminal()
}

#[cfg(target_arch = "wasm32")]
pub fn stderr_is_terminal() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(strip_ansi_escapes("first\n  second"), "first\n  second");
    }

    #[test]
    fn strips_colors_and_resets() {
        let styled = format!("{BOLD_BG_RED}bad{RESET} and {YELLOW}odd{RESET}");
        assert_eq!(strip_ansi_escapes(&styled), "bad and odd");
    }

    #[test]
    fn strips_cursor_movement_and_titles() {
        assert_eq!(strip_ansi_escapes("a\x1b[2Kb\x1b[10;3Hc"), "abc");
        assert_eq!(strip_ansi_escapes("\x1b]0;title\x07done"), "done");
        assert_eq!(strip_ansi_escapes("\x1b]8;;http://x\x1b\\link"), "link");
        assert_eq!(strip_ansi_escapes("\x1bMup"), "up");
    }
}
