//! Property tests for the code normalizers.

use proptest::prelude::*;
use schedb_ingest::XmlElement;
use schedb_transform::normalization::{convert_time, decode_days};

const DAY_NAMES: [&str; 5] = ["mon", "tue", "wed", "thu", "fri"];

fn days_element(digits: &[u8]) -> Vec<XmlElement> {
    digits
        .iter()
        .map(|digit| XmlElement::new("DAY").with_text(digit.to_string()))
        .collect()
}

proptest! {
    #[test]
    fn decoded_days_are_the_set_bits_monday_first(digits in prop::collection::vec(0u8..5, 0..12)) {
        let children = days_element(&digits);
        let expected: Vec<&str> = DAY_NAMES
            .iter()
            .enumerate()
            .filter(|(index, _)| digits.contains(&(*index as u8)))
            .map(|(_, name)| *name)
            .collect();
        prop_assert_eq!(decode_days(&children), expected.join(","));
    }

    #[test]
    fn out_of_range_days_are_ignored(digits in prop::collection::vec(5u8..10, 0..6)) {
        let children = days_element(&digits);
        prop_assert_eq!(decode_days(&children), "");
    }

    #[test]
    fn valid_times_convert_to_twelve_hour_clock(hour in 0u32..24, minute in 0u32..60) {
        let raw = format!("{hour:02}{minute:02}");
        let expected_hour = match hour {
            0..=12 => hour,
            _ => hour - 12,
        };
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        prop_assert_eq!(
            convert_time(&raw),
            format!("{expected_hour}:{minute:02}{meridiem}")
        );
    }
}
