// Start of file: /src/api/process/decoration.rs

use chrono::NaiveDateTime;

/// 24-hour, zero-padded wall-clock time
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds `<marker> <message> (<timestamp>)`.
///
/// `at` is local wall-clock time; the caller decides which instant to use so
/// the output is fully determined by the arguments.
pub fn decorate(marker: &str, message: &str, at: NaiveDateTime) -> String {
    format!("{marker} {message} ({})", at.format(TIMESTAMP_FORMAT))
}


// End of file: /src/api/process/decoration.rs
