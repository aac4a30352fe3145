//! Human-readable rendering of counts, durations and publish times.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

const BILLION: u64 = 1_000_000_000;
const MILLION: u64 = 1_000_000;
const THOUSAND: u64 = 1_000;

fn abbreviate(n: u64) -> Option<String> {
    if n >= BILLION {
        Some(format!("{:.1}B", n as f64 / BILLION as f64))
    } else if n >= MILLION {
        Some(format!("{:.1}M", n as f64 / MILLION as f64))
    } else if n >= THOUSAND {
        Some(format!("{:.1}K", n as f64 / THOUSAND as f64))
    } else {
        None
    }
}

/// Abbreviate a count: `1500` → `1.5K`. Below a thousand the raw number is
/// followed by a space so a unit can be appended directly.
pub fn format_count(n: u64) -> String {
    abbreviate(n).unwrap_or_else(|| format!("{} ", n))
}

/// Same thresholds as [`format_count`] with a `views` unit
pub fn format_view_count(n: u64) -> String {
    match abbreviate(n) {
        Some(short) => format!("{} views", short),
        None => format!("{} views", n),
    }
}

/// Group digits by thousands: `1234567` → `1,234,567`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").expect("duration pattern is valid")
    })
}

/// Render an ISO-8601 `PT#H#M#S` duration as `H:MM:SS` or `M:SS`.
///
/// A missing duration on a live broadcast renders `LIVE`. Missing or
/// malformed durations otherwise render as an empty string.
pub fn format_duration(iso_duration: Option<&str>, live_flag: &str) -> String {
    let duration = match iso_duration.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => d,
        None if live_flag == "live" => return "LIVE".to_string(),
        None => return String::new(),
    };

    let Some(caps) = duration_pattern().captures(duration) else {
        return String::new();
    };

    let mut parts = [0u64; 3];
    for (slot, group) in parts.iter_mut().zip(1..=3) {
        if let Some(m) = caps.get(group) {
            match m.as_str().parse() {
                Ok(value) => *slot = value,
                Err(_) => return String::new(),
            }
        }
    }
    let [hours, minutes, seconds] = parts;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

const TIME_UNITS: [(&str, i64); 5] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
];

fn pluralize(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Relative publish time (`3 days ago`) measured against the current clock
pub fn time_ago(timestamp: &str) -> String {
    time_ago_at(timestamp, Utc::now())
}

/// Relative time of an RFC 3339 `timestamp` as seen from `now`.
///
/// Future timestamps count as zero seconds ago; unparseable ones render empty.
pub fn time_ago_at(timestamp: &str, now: DateTime<Utc>) -> String {
    let published = match DateTime::parse_from_rfc3339(timestamp.trim()) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => return String::new(),
    };

    let elapsed = now.signed_duration_since(published).num_seconds().max(0);

    for (unit, seconds) in TIME_UNITS {
        let n = elapsed / seconds;
        if n >= 1 {
            return pluralize(n, unit);
        }
    }
    pluralize(elapsed, "second")
}
