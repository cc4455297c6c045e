/*!
 * Timestamp normalization for source subtitle formats.
 *
 * Source timestamps come as `mm:ss`, `hh:mm:ss`, with or without a
 * fractional part, and with either `,` or `.` as the fractional separator.
 * WebVTT cues need `hh:mm:ss.ttt`.
 */

use crate::errors::{Result, WebVttError};

/// Left-pad `value` with zeros up to `width` characters
fn pad_left(value: &str, width: usize) -> String {
    format!("{:0>width$}", value, width = width)
}

/// Right-pad `value` with zeros up to `width` characters
fn pad_right(value: &str, width: usize) -> String {
    format!("{:0<width$}", value, width = width)
}

/// Normalize a loosely formatted timestamp into `hh:mm:ss.ttt`.
///
/// Components are padded, never truncated or range-checked: an oversized
/// component yields a string that later fails cue time validation. Input
/// without at least `mm:ss` fails with [`WebVttError::Format`]. Components
/// beyond hours are ignored.
///
/// ```
/// use ttaf2vtt::time_format::normalize_cue_time;
///
/// assert_eq!(normalize_cue_time("1:2,5").unwrap(), "00:01:02.500");
/// assert_eq!(normalize_cue_time("01:02:03.456").unwrap(), "01:02:03.456");
/// ```
pub fn normalize_cue_time(cue_time: &str) -> Result<String> {
    let cue_time = cue_time.trim().replace(',', ".");
    let parts: Vec<&str> = cue_time.split(':').rev().collect();

    if parts.len() < 2 {
        return Err(WebVttError::Format(format!(
            "invalid cue time `{}`, must at least be mm:ss",
            cue_time
        )));
    }

    // Seconds & milliseconds
    let mut seconds = parts[0].split('.');
    let whole_seconds = pad_left(seconds.next().unwrap_or_default(), 2);
    let millis = match seconds.next() {
        Some(fraction) => pad_right(fraction, 3),
        None => "000".to_string(),
    };

    let minutes = pad_left(parts[1], 2);

    let hours = match parts.get(2) {
        Some(hours) => pad_left(hours, 2),
        None => "00".to_string(),
    };

    Ok(format!("{}:{}:{}.{}", hours, minutes, whole_seconds, millis))
}
