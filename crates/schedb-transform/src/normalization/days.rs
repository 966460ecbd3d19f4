//! Weekday decoding for `PERIOD` records.
//!
//! Each `DAY` child holds one digit, `0` (Monday) through `4` (Friday).
//! The digits are folded into a five-bit mask, bit 0 for Monday.

use schedb_ingest::ElementLike;

/// Weekday lists indexed by mask, Monday first.
pub const DAY_LISTS: [&str; 32] = [
    "",
    "mon",
    "tue",
    "mon,tue",
    "wed",
    "mon,wed",
    "tue,wed",
    "mon,tue,wed",
    "thu",
    "mon,thu",
    "tue,thu",
    "mon,tue,thu",
    "wed,thu",
    "mon,wed,thu",
    "tue,wed,thu",
    "mon,tue,wed,thu",
    "fri",
    "mon,fri",
    "tue,fri",
    "mon,tue,fri",
    "wed,fri",
    "mon,wed,fri",
    "tue,wed,fri",
    "mon,tue,wed,fri",
    "thu,fri",
    "mon,thu,fri",
    "tue,thu,fri",
    "mon,tue,thu,fri",
    "wed,thu,fri",
    "mon,wed,thu,fri",
    "tue,wed,thu,fri",
    "mon,tue,wed,thu,fri",
];

const DAY_TAG: &str = "DAY";

/// Fold the `DAY` children of a period into a weekday mask.
///
/// Children with another tag, and days whose text does not start with a
/// digit `0`-`4`, are ignored. Repeated days set the same bit.
pub fn day_mask<'a, E>(children: impl IntoIterator<Item = &'a E>) -> u8
where
    E: ElementLike + 'a,
{
    children
        .into_iter()
        .filter(|child| child.tag() == DAY_TAG)
        .filter_map(|day| match day.text().bytes().next() {
            Some(digit @ b'0'..=b'4') => Some(1u8 << (digit - b'0')),
            _ => None,
        })
        .fold(0, |mask, bit| mask | bit)
}

/// Weekday list for a mask. Bits above Friday are ignored.
pub fn days_for_mask(mask: u8) -> &'static str {
    DAY_LISTS[usize::from(mask & 0x1f)]
}

/// Decode the children of a period into a comma-joined weekday list.
pub fn decode_days<'a, E>(children: impl IntoIterator<Item = &'a E>) -> &'static str
where
    E: ElementLike + 'a,
{
    days_for_mask(day_mask(children))
}
