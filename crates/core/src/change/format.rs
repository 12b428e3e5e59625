//! Human-readable formatting of change results.

use super::denomination::Coin;
use super::types::ChangeResult;

/// Formats a result as `"3 quarters,4 pennies"` in canonical coin order.
///
/// Counts of one stay singular; absent entries are skipped; an empty
/// breakdown formats to the empty string.
#[must_use]
pub fn format_result(result: &ChangeResult) -> String {
    let mut parts = Vec::new();

    for coin in Coin::DESCENDING {
        if let Some(&count) = result.denominations.get(&coin) {
            let plural = if count == 1 { "" } else { "s" };
            parts.push(format!("{count} {coin}{plural}"));
        }
    }

    parts.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::engine::minimum;

    #[test]
    fn test_empty_result_formats_to_empty_string() {
        assert_eq!(format_result(&ChangeResult::empty()), "");
    }

    #[test]
    fn test_pluralization_and_separator() {
        // 99 cents: 3 quarters, 2 dimes, 4 pennies
        assert_eq!(format_result(&minimum(99)), "3 quarters,2 dimes,4 pennies");
    }

    #[test]
    fn test_singular_counts() {
        // 141 cents: one of everything
        assert_eq!(
            format_result(&minimum(141)),
            "1 dollar,1 quarter,1 dime,1 nickel,1 penny"
        );
    }

    #[test]
    fn test_canonical_order_with_gaps() {
        // 205 cents: dollars and a nickel, nothing in between
        assert_eq!(format_result(&minimum(205)), "2 dollars,1 nickel");
    }
}
