/// The backend serializes datetimes as ISO-8601 without an offset and with
/// microseconds, so try RFC 3339 first and fall back to the naive form.
/// Unparseable input is shown as-is.
pub fn format_iso8601_datetime(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        return datetime.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(iso_date, "%Y-%m-%dT%H:%M:%S%.f") {
        return datetime.format("%Y-%m-%d %H:%M").to_string();
    }
    iso_date.to_string()
}

pub fn format_file_size(bytes: i64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let bytes = bytes as f64;
    if bytes >= GB {
        format!("{:.1} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} B", bytes as i64)
    }
}

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_backend_timestamps_without_offset() {
        assert_eq!(
            format_iso8601_datetime("2025-07-01T09:30:00.123456"),
            "2025-07-01 09:30"
        );
    }

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(
            format_iso8601_datetime("2025-07-01T09:30:00Z"),
            "2025-07-01 09:30"
        );
    }

    #[test]
    fn passes_unparseable_dates_through() {
        assert_eq!(format_iso8601_datetime("Never"), "Never");
    }

    #[test]
    fn formats_file_sizes_across_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn formats_numbers_with_thousand_separators() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
