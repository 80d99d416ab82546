// Display formatting shared by the table, map popups and detail view
use chrono::{DateTime, Utc};

pub const PLACEHOLDER: &str = "--";

pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// "35,000 ft"
pub fn format_feet(value: Option<f64>) -> String {
    match value {
        Some(feet) => format!("{} ft", group_thousands(feet.round() as i64)),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_knots(value: Option<f64>) -> String {
    match value {
        Some(speed) => format!("{:.0} kts", speed),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_degrees(value: Option<f64>) -> String {
    match value {
        Some(degrees) => format!("{:.0}\u{00B0}", degrees),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_vertical_rate(value: Option<f64>) -> String {
    match value {
        Some(rate) => format!("{:.0} ft/min", rate),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_coordinate(value: Option<f64>) -> String {
    match value {
        Some(degrees) => format!("{:.6}", degrees),
        None => PLACEHOLDER.to_string(),
    }
}

/// Renders an ISO-8601 timestamp in UTC; unparseable input is shown as-is.
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|s| !s.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(time) => time
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(format_feet(Some(35000.0)), "35,000 ft");
        assert_eq!(format_feet(Some(-1200.0)), "-1,200 ft");
        assert_eq!(format_feet(Some(900.0)), "900 ft");
        assert_eq!(format_knots(Some(450.4)), "450 kts");
        assert_eq!(format_degrees(Some(270.0)), "270°");
        assert_eq!(format_vertical_rate(Some(-64.0)), "-64 ft/min");
        assert_eq!(format_coordinate(Some(38.8977)), "38.897700");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(format_feet(None), "--");
        assert_eq!(format_knots(None), "--");
        assert_eq!(text_or_placeholder(Some("")), "--");
        assert_eq!(text_or_placeholder(None), "--");
        assert_eq!(text_or_placeholder(Some("RCH123")), "RCH123");
        assert_eq!(format_timestamp(None), "--");
    }

    #[test]
    fn test_timestamps() {
        assert_eq!(
            format_timestamp(Some("2025-01-15T12:00:00Z")),
            "2025-01-15 12:00:00 UTC"
        );
        assert_eq!(
            format_timestamp(Some("2025-01-15T14:30:00+02:00")),
            "2025-01-15 12:30:00 UTC"
        );
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
    }
}
