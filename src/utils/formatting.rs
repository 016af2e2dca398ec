//! Formatting utilities used for CLI and export outputs.

/// Explicit sign for non-zero values: +3, -2, 0.
pub fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Local timestamp in a compact, sortable form.
pub fn short_timestamp(ts: &chrono::DateTime<chrono::Local>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
