// Display helpers for repository cards.
// Language colours, compact counts, and relative timestamps.

use chrono::{DateTime, Utc};

const UNKNOWN_LANGUAGE_COLOR: &str = "#858585";

/// GitHub-style hex colour for a language.
pub fn language_color(language: Option<&str>) -> &'static str {
    match language {
        Some("Python") => "#3572A5",
        Some("JavaScript") => "#F1E05A",
        Some("TypeScript") => "#2B7A0B",
        Some("Java") => "#b07219",
        Some("C#") => "#239120",
        Some("Swift") => "#FA7343",
        Some("Kotlin") => "#7F52FF",
        Some("Go") => "#00ADD8",
        Some("Rust") => "#CE422B",
        Some("Ruby") => "#CC342D",
        Some("PHP") => "#777BB4",
        Some("C++") => "#00599C",
        Some("C") => "#A8B9CC",
        Some("HTML") => "#E34C26",
        Some("CSS") => "#563D7C",
        Some("SQL") => "#336791",
        Some("Dart") => "#00B4AB",
        Some("Shell") => "#89E051",
        Some("Objective-C") => "#438EFF",
        Some("PowerShell") => "#012456",
        Some("SCSS") => "#C6538C",
        Some("Less") => "#1D365D",
        Some("Markdown") => "#083FA1",
        _ => UNKNOWN_LANGUAGE_COLOR,
    }
}

/// Parse a `#rrggbb` string into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// 1234 -> "1.2K", 2_500_000 -> "2.5M".
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Relative age such as "3 days ago".
///
/// A unit is used once more than one of it has elapsed, so 36 hours reads
/// "1 days ago" and exactly 24 hours reads "24 hours ago".
pub fn time_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds().max(0) as f64;

    const UNITS: [(f64, &str); 5] = [
        (31_536_000.0, "years"),
        (2_592_000.0, "months"),
        (86_400.0, "days"),
        (3_600.0, "hours"),
        (60.0, "minutes"),
    ];

    for (size, unit) in UNITS {
        let interval = seconds / size;
        if interval > 1.0 {
            return format!("{} {} ago", interval.floor() as u64, unit);
        }
    }

    format!("{} seconds ago", seconds as u64)
}
