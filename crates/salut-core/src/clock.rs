//! Wall-clock formatting for the live clock.

use chrono::{Local, Timelike};

/// Formats a time of day as zero-padded 24-hour `HH:MM:SS`.
pub fn format_time<T: Timelike>(time: &T) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Formats the current local time for display.
pub fn now_display() -> String {
    format_time(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_zero_padded() {
        let t = NaiveTime::from_hms_opt(9, 5, 3).unwrap();
        assert_eq!(format_time(&t), "09:05:03");
    }

    #[test]
    fn test_24_hour_bounds() {
        let end = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        assert_eq!(format_time(&end), "23:59:59");

        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(format_time(&midnight), "00:00:00");
    }

    #[test]
    fn test_now_display_shape() {
        let display = now_display();
        assert_eq!(display.len(), 8);
        assert_eq!(display.as_bytes()[2], b':');
        assert_eq!(display.as_bytes()[5], b':');
    }
}
