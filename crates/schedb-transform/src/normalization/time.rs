//! Meeting time conversion from 24-hour codes to 12-hour clock text.

/// Placeholder the catalog uses for unscheduled times.
pub const TBA: &str = "** TBA **";

/// Convert a four-character `HHMM` code to `H:MMAM`/`HH:MMPM` text.
///
/// [`TBA`] passes through unchanged, as does any code too short to decode or
/// whose hour prefix falls outside `00`-`29`. Only the first four characters
/// are read; the minutes are copied verbatim.
///
/// Hour `00` is rendered as `0`, not `12`: `"0015"` becomes `"0:15AM"`.
///
/// # Examples
/// ```
/// use schedb_transform::normalization::convert_time;
///
/// assert_eq!(convert_time("0930"), "9:30AM");
/// assert_eq!(convert_time("1245"), "12:45PM");
/// assert_eq!(convert_time("2330"), "11:30PM");
/// ```
pub fn convert_time(raw: &str) -> String {
    if raw == TBA {
        return raw.to_string();
    }
    let Some(minutes) = raw.get(2..4) else {
        return raw.to_string();
    };
    let bytes = raw.as_bytes();
    if !bytes[1].is_ascii_digit() {
        return raw.to_string();
    }
    let digit = bytes[1] - b'0';
    let (hour, meridiem) = match bytes[0] {
        b'0' => (digit, "AM"),
        b'1' => match digit {
            0 | 1 => (10 + digit, "AM"),
            2 => (12, "PM"),
            _ => (digit - 2, "PM"),
        },
        // 20 and 21 become 8 and 9, 22 and 23 become 10 and 11.
        b'2' => (digit + 8, "PM"),
        _ => return raw.to_string(),
    };
    format!("{hour}:{minutes}{meridiem}")
}
