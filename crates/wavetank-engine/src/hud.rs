//! Status-line helpers: elapsed-time clock and frame-rate figures.

use std::time::Duration;

/// Format an elapsed-seconds count the way a stopwatch would.
///
/// Under a minute the raw seconds print alone, under an hour as `M:SS`,
/// and beyond that as `H:MM:SS`.
pub fn format_clock(elapsed_secs: u64) -> String {
    let seconds = elapsed_secs % 60;
    let minutes = (elapsed_secs / 60) % 60;
    let hours = elapsed_secs / 3600;
    if elapsed_secs < 60 {
        format!("{elapsed_secs}")
    } else if elapsed_secs < 3600 {
        format!("{}:{seconds:02}", elapsed_secs / 60)
    } else {
        format!("{hours}:{minutes:02}:{seconds:02}")
    }
}

/// Frames per second for one frame's wall-clock duration, rounded to
/// the nearest whole frame. A zero duration reports zero rather than
/// dividing by it.
pub fn fps_estimate(frame_time: Duration) -> u32 {
    let secs = frame_time.as_secs_f64();
    if secs > 0.0 {
        (1.0 / secs).round() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_under_a_minute_is_bare_seconds() {
        assert_eq!(format_clock(0), "0");
        assert_eq!(format_clock(7), "7");
        assert_eq!(format_clock(59), "59");
    }

    #[test]
    fn clock_under_an_hour_is_minutes_and_seconds() {
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(61), "1:01");
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn clock_beyond_an_hour_adds_the_hour_field() {
        assert_eq!(format_clock(3600), "1:00:00");
        assert_eq!(format_clock(3661), "1:01:01");
        assert_eq!(format_clock(7322), "2:02:02");
    }

    #[test]
    fn fps_rounds_to_the_nearest_frame() {
        assert_eq!(fps_estimate(Duration::from_millis(1000)), 1);
        assert_eq!(fps_estimate(Duration::from_millis(16)), 63);
        assert_eq!(fps_estimate(Duration::from_micros(11_765)), 85);
    }

    #[test]
    fn zero_frame_time_reports_zero() {
        assert_eq!(fps_estimate(Duration::ZERO), 0);
    }
}
