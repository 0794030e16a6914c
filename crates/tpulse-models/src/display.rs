//! Display formatting for dashboard video cards.
//!
//! The dashboard targets the Korean trending chart, so counts use the
//! Korean grouping units (천 = 10^3, 만 = 10^4, 억 = 10^8).

use chrono::{DateTime, Utc};

/// Format a raw view count such as "1240000" as "124만회".
///
/// Non-numeric input is treated as zero.
pub fn format_view_count(raw: &str) -> String {
    let views: u64 = raw.trim().parse().unwrap_or(0);

    if views >= 100_000_000 {
        format!("{}억회", one_decimal(views as f64 / 100_000_000.0))
    } else if views >= 10_000 {
        format!("{}만회", one_decimal(views as f64 / 10_000.0))
    } else if views >= 1_000 {
        format!("{}천회", one_decimal(views as f64 / 1_000.0))
    } else {
        format!("{}회", group_digits(views))
    }
}

/// Format how long ago a video was published, relative to `now`.
///
/// Falls back to the raw input when it is not an RFC 3339 timestamp.
pub fn format_relative_time(published_at: &str, now: DateTime<Utc>) -> String {
    let published = match DateTime::parse_from_rfc3339(published_at) {
        Ok(t) => t.with_timezone(&Utc),
        Err(_) => return published_at.to_string(),
    };

    let hours = (now - published).num_hours();
    if hours < 1 {
        return "방금 전".to_string();
    }
    if hours < 24 {
        return format!("{}시간 전", hours);
    }
    let days = hours / 24;
    if days < 30 {
        return format!("{}일 전", days);
    }
    published.format("%Y-%m-%d").to_string()
}

fn one_decimal(value: f64) -> String {
    let s = format!("{:.1}", value);
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
