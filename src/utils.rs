/// Formats seconds as `MM:SS`. Minutes are not wrapped into hours; negative
/// or non-finite input shows as `00:00`.
pub fn format_timecode(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// `current / duration` as shown by the status bar and the player controls.
pub fn format_progress(current_seconds: f64, duration_seconds: f64) -> String {
    format!(
        "{} / {}",
        format_timecode(current_seconds),
        format_timecode(duration_seconds)
    )
}

pub fn parse_f64_input(value: &str, fallback: f64) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed.parse::<f64>().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timecode() {
        assert_eq!(format_timecode(0.0), "00:00");
        assert_eq!(format_timecode(59.99), "00:59");
        assert_eq!(format_timecode(61.0), "01:01");
        assert_eq!(format_timecode(3725.4), "62:05");
    }

    #[test]
    fn test_format_timecode_degenerate_input() {
        assert_eq!(format_timecode(-4.0), "00:00");
        assert_eq!(format_timecode(f64::NAN), "00:00");
        assert_eq!(format_timecode(f64::INFINITY), "00:00");
    }

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(42.0, 596.5), "00:42 / 09:56");
    }

    #[test]
    fn test_parse_f64_input_falls_back() {
        assert_eq!(parse_f64_input(" 12.5 ", 0.0), 12.5);
        assert_eq!(parse_f64_input("", 3.0), 3.0);
        assert_eq!(parse_f64_input("abc", 3.0), 3.0);
    }
}
