//! Display helpers for uploaded files.

use chrono::{DateTime, Utc};

const UNIT: u64 = 1024;
const PREFIXES: &[char] = &['K', 'M', 'G', 'T', 'P', 'E'];

/// Render a byte count with binary prefixes, e.g. `1.5 MiB`.
pub fn human_size(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}iB", bytes as f64 / div as f64, PREFIXES[exp])
}

/// Browser link for a file, used when the API does not return one.
pub fn view_link(file_id: &str) -> String {
    format!("https://drive.google.com/file/d/{}/view?usp=sharing", file_id)
}

/// Direct download link for a file.
pub fn direct_link(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={}", file_id)
}

/// Parse an RFC 3339 timestamp as returned by Drive.
pub fn parse_created(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Long timestamp for terminal output.
pub fn created_long(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Short timestamp for chat notifications.
pub fn created_short(t: &DateTime<Utc>) -> String {
    t.format("%d %b %y %H:%M UTC").to_string()
}
