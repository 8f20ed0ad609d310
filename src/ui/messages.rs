//! User-facing status lines: an icon and a coloured lead, then the text.
//!
//! The `*_line` builders return the formatted line so callers that own a
//! writer (line-driven sessions, tests) can print it there.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }
}

const HEADER_COLOR: &str = "\x1b[34m";
const QUOTE_COLOR: &str = "\x1b[35m";
const QUOTE_ICON: &str = "💬";
const QUOTE_WIDTH: usize = 60;

fn status_line(level: Level, msg: impl fmt::Display) -> String {
    let (color, icon) = level.style();
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info_line<T: fmt::Display>(msg: T) -> String {
    status_line(Level::Info, msg)
}

pub fn warning_line<T: fmt::Display>(msg: T) -> String {
    status_line(Level::Warning, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", info_line(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", status_line(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", warning_line(msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", status_line(Level::Error, msg));
}

/// Section banner printed above a command's output.
pub fn header<T: fmt::Display>(title: T) {
    println!("{HEADER_COLOR}{BOLD}====================== {title}\n{RESET}");
}

/// Motivational quote, wrapped and indented under an icon.
pub fn quote(text: &str) {
    for (i, line) in textwrap::wrap(text, QUOTE_WIDTH).iter().enumerate() {
        let lead = if i == 0 { QUOTE_ICON } else { "  " };
        println!("{lead} {QUOTE_COLOR}{ITALIC}{line}{RESET}");
    }
}
