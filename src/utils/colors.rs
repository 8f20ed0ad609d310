/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Entry in green, exit in red.
pub fn colorize_kind(value: &str, is_entry: bool) -> String {
    if is_entry {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

/// Disabled calendar cells are greyed out.
pub fn colorize_enabled(value: &str, enabled: bool) -> String {
    if enabled {
        value.to_string()
    } else {
        format!("{GREY}{value}{RESET}")
    }
}

/// Highlight for the currently selected calendar cell.
pub fn highlight(value: &str) -> String {
    format!("{CYAN}[{value}]{RESET}")
}
