/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const WHITE_ON_GREEN: &str = "\x1b[42;97;1m";
pub const WHITE_ON_RED: &str = "\x1b[41;97;1m";

/// Foreground color for a confirmation flag:
/// confirmed → green, not confirmed → red
pub fn color_for_confirmed(confirmed: bool) -> &'static str {
    if confirmed { GREEN } else { RED }
}

/// Background color for the large status badge of the detail panel.
pub fn badge_color_for_confirmed(confirmed: bool) -> &'static str {
    if confirmed {
        WHITE_ON_GREEN
    } else {
        WHITE_ON_RED
    }
}

/// Paint a small inline badge, e.g. `[Confirmed]` in green.
pub fn colorize_badge(label: &str, confirmed: bool) -> String {
    format!("{}[{}]{}", color_for_confirmed(confirmed), label, RESET)
}

/// Grey text, used for timestamps and placeholders.
pub fn dim(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}
