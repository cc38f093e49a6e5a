//! ANSI escape codes for terminal output

/// Resets all attributes back to the terminal default
pub const RESET: &str = "\x1b[0m";
