/// Parses a comma-separated category list: split on commas, trim each
/// piece, drop empty pieces. First-occurrence order is preserved and
/// duplicates are kept as-is.
pub fn parse_categories(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_split_and_trim_categories() {
        assert_eq!(
            parse_categories("office, stationery ,writing"),
            vec!["office", "stationery", "writing"]
        );
    }

    #[test]
    fn should_drop_empty_pieces() {
        assert_eq!(parse_categories("a,,b, ,c,"), vec!["a", "b", "c"]);
    }

    #[test]
    fn should_return_empty_list_for_blank_input() {
        assert!(parse_categories("").is_empty());
        assert!(parse_categories("   ").is_empty());
        assert!(parse_categories(",,,").is_empty());
    }

    #[test]
    fn should_keep_duplicates_and_order() {
        assert_eq!(parse_categories("b,a,b"), vec!["b", "a", "b"]);
    }

    proptest! {
        #[test]
        fn parsed_categories_are_trimmed_and_non_empty(input in ".{0,64}") {
            for category in parse_categories(&input) {
                prop_assert!(!category.is_empty());
                prop_assert_eq!(category.trim(), category.as_str());
                prop_assert!(!category.contains(','));
            }
        }

        #[test]
        fn parsing_is_stable_under_reparse(
            pieces in proptest::collection::vec("[a-z ]{0,8}", 0..6)
        ) {
            let input = pieces.join(",");
            let parsed = parse_categories(&input);
            let reparsed = parse_categories(&parsed.join(","));
            prop_assert_eq!(parsed, reparsed);
        }
    }
}
