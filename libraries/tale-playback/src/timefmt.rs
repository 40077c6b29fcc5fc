//! Transport clock formatting.

/// Format seconds as `M:SS`.
///
/// The minutes field is unbounded (3600 seconds renders as "60:00");
/// seconds are always two digits. Non-finite or negative input renders
/// as "0:00".
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn zero() {
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn pads_seconds() {
        assert_eq!(format_time(65.0), "1:05");
    }

    #[test]
    fn minutes_are_unbounded() {
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(3725.0), "62:05");
    }

    #[test]
    fn fractional_seconds_floor() {
        assert_eq!(format_time(59.9), "0:59");
    }

    #[test]
    fn garbage_input_renders_as_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(-12.0), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }
}
