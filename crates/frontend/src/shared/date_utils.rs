/// Utilities for date formatting
///
/// Provides consistent date formatting for table cells
use chrono::{DateTime, Utc};

/// Format a coerced date value as DD.MM.YYYY
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024"
///
/// Invalid dates (`None`) render as an empty cell.
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(Some(dt)), "15.03.2024");
    }

    #[test]
    fn test_invalid_date_is_empty() {
        assert_eq!(format_date(None), "");
    }
}
