use once_cell::sync::Lazy;
use regex::Regex;

/// SRT timecode arithmetic.
///
/// Timecodes are represented as non-negative millisecond counts and rendered
/// in the canonical `HH:MM:SS,mmm` form.

// @const: SRT timecode regex, anchored at the start of the input
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2}),(\d{1,3})").unwrap()
});

/// Parse an SRT timecode to milliseconds.
///
/// Accepts `HH:MM:SS,mmm` with a 1-3 digit millisecond field; short fields are
/// right-padded with zeros (`54` parses as `540`). Inputs that do not match the
/// pattern yield 0 rather than an error.
pub fn parse(text: &str) -> u64 {
    let Some(caps) = TIMECODE_REGEX.captures(text) else {
        return 0;
    };

    let hours: u64 = caps[1].parse().unwrap_or(0);
    let minutes: u64 = caps[2].parse().unwrap_or(0);
    let seconds: u64 = caps[3].parse().unwrap_or(0);

    let mut millis_str = caps[4].to_string();
    while millis_str.len() < 3 {
        millis_str.push('0');
    }
    let millis: u64 = millis_str.parse().unwrap_or(0);

    hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis
}

/// Format milliseconds as an SRT timecode (`HH:MM:SS,mmm`).
///
/// Fields are zero-padded to 2/2/2/3 digits; an hour count over 99 simply
/// widens the hours field.
pub fn format(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Format milliseconds as `HH:MM:SS` for human display.
pub fn format_duration(ms: u64) -> String {
    let seconds = ms / 1_000;
    let hours = seconds / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
