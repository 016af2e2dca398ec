/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Differential color:
/// \>0 → green (spare supply)
/// \<0 → red (oversold)
/// 0 → reset
pub fn color_for_differential(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

pub fn colorize_differential(value: i64) -> String {
    let color = color_for_differential(value);
    format!("{color}{}{RESET}", crate::utils::formatting::signed(value))
}

/// Grey out zero counts so the interesting buckets stand out.
pub fn colorize_count(value: i64) -> String {
    if value == 0 {
        format!("{GREY}0{RESET}")
    } else {
        value.to_string()
    }
}
