//! Normalization of coded catalog values to their schedb display forms.
//!
//! Every function here is pure:
//! - **codes**: meeting-type abbreviations and grading classification
//! - **days**: `DAY` children to a Monday-first weekday list
//! - **time**: 24-hour time codes to 12-hour clock text

pub mod codes;
pub mod days;
pub mod time;

pub use codes::{MEETING_TYPES, classify_grade_type, expand_abbreviation, is_known_abbreviation};
pub use days::{DAY_LISTS, day_mask, days_for_mask, decode_days};
pub use time::{TBA, convert_time};
