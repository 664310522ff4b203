#[cfg(test)]
mod tests {
    use chrono::{Local, Utc};
    use ritmo::libs::formatter::{format_date, format_timestamp};

    #[test]
    fn test_format_timestamp_shape() {
        let now = Utc::now().timestamp_millis();
        let formatted = format_timestamp(now);

        // "YYYY-MM-DD HH:MM"
        assert_eq!(formatted.len(), 16);
        assert_eq!(formatted.as_bytes()[4], b'-');
        assert_eq!(formatted.as_bytes()[7], b'-');
        assert_eq!(formatted.as_bytes()[10], b' ');
        assert_eq!(formatted.as_bytes()[13], b':');
        assert!(formatted.starts_with(&format_date(now)));
    }

    #[test]
    fn test_format_date_is_local_today_for_now() {
        let now = Utc::now().timestamp_millis();
        assert_eq!(format_date(now), Local::now().format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_out_of_range_renders_dash() {
        assert_eq!(format_timestamp(i64::MAX), "-");
        assert_eq!(format_timestamp(i64::MIN), "-");
        assert_eq!(format_date(i64::MAX), "-");
        assert_eq!(format_date(i64::MIN), "-");
    }
}
