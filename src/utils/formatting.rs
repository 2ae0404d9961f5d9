//! Formatting utilities used for the statistics output.

/// Render a number of seconds as `Xd HHh MMm SSs` (days omitted when zero).
pub fn secs2readable(secs: f64) -> String {
    let total = secs.abs().round() as u64;
    let sign = if secs < 0.0 && total > 0 { "-" } else { "" };

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{sign}{days}d {hours:02}h {minutes:02}m {seconds:02}s")
    } else {
        format!("{sign}{hours:02}h {minutes:02}m {seconds:02}s")
    }
}

/// Print a float the way the data sets store them: integral values keep a
/// trailing `.0`, others show at most 2 decimals.
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        let s = format!("{:.2}", v);
        let trimmed = s.trim_end_matches('0');
        if trimmed.ends_with('.') {
            format!("{trimmed}0")
        } else {
            trimmed.to_string()
        }
    }
}

pub fn separator() -> String {
    "-".repeat(40)
}
