use crate::inventory::ordered_set::OrderedSet;
use crate::inventory::patterns::SERIAL_NUMBER_REGEX;

/// Every `System serial number` in `text`, duplicates dropped, in the order
/// they first appear.
pub fn extract_serial_numbers(text: &str) -> Vec<String> {
    SERIAL_NUMBER_REGEX
        .captures_iter(text)
        .map(|caps| caps["serial_number"].to_string())
        .collect::<OrderedSet<_>>()
        .into_vec()
}
