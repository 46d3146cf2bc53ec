//! String-shape and pattern guards end to end.

use ward_tests::prelude::*;

mod shape {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_and_not_empty_partition_on_length_zero() {
        // GIVEN - white-space is not emptiness
        let blank = " ".to_string();

        // THEN
        assert!(arg!(blank.as_str()).not_empty().is_ok());
        expect_invalid_argument(arg!("").empty().and_then(|a| a.not_empty()));
        assert!(arg!("").empty().is_ok());
    }

    #[test]
    fn test_whitespace_only_on_blanks_succeeds() {
        // GIVEN
        let padding = "  ";

        // THEN
        assert!(arg!(padding).whitespace_only().is_ok());
    }

    #[test]
    fn test_not_empty_on_the_empty_string_fails() {
        // GIVEN
        let title = "";

        // WHEN
        let err = expect_invalid_argument(arg!(title).not_empty());

        // THEN
        assert_eq!(err.name(), "title");
        assert_eq!(err.message(), "title must not be an empty string, but was \"\".");
    }

    #[test]
    fn test_character_counts_are_unicode_aware() {
        // GIVEN - four characters, five bytes
        let name = "héll";

        // THEN
        assert!(arg!(name).length(4).is_ok());
        assert!(arg!(name).min_length(4).is_ok());
        assert!(arg!(name).max_length(4).is_ok());
        expect_invalid_argument(arg!(name).not_length(4));
    }

    #[test]
    fn test_length_bounds_are_one_sided() {
        // GIVEN
        let code = "abcde";

        // THEN - each side only checks its own side
        assert!(arg!(code).min_length(5).is_ok());
        assert!(arg!(code).max_length(5).is_ok());
        expect_invalid_argument(arg!(code).min_length(6));
        expect_invalid_argument(arg!(code).max_length(4));
    }

    #[test]
    fn test_absent_strings_satisfy_every_shape_guard() {
        // GIVEN
        let absent = || Argument::<String>::optional(None).named("note");

        // THEN
        assert!(absent().empty().is_ok());
        assert!(absent().not_empty().is_ok());
        assert!(absent().whitespace_only().is_ok());
        assert!(absent().not_whitespace_only().is_ok());
        assert!(absent().length(1).is_ok());
        assert!(absent().min_length(1).is_ok());
    }
}

mod patterns {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prefix_and_suffix_guards() {
        // GIVEN
        let file = "report.csv";

        // THEN
        assert!(arg!(file).ends_with(".csv").is_ok());
        assert!(arg!(file).does_not_start_with("tmp-").is_ok());
        expect_invalid_argument(arg!(file).starts_with("export-"));
    }

    #[test]
    fn test_regex_guards_with_a_compiled_pattern() {
        // GIVEN
        let uuid = Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .unwrap();
        let id = "9f8b1c2d-0a3e-4f56-8b7c-1d2e3f4a5b6c";

        // THEN
        assert!(arg!(id).matches(&uuid).is_ok());
        expect_invalid_argument(arg!("not-a-uuid").matches(&uuid));
    }

    #[test]
    fn test_pattern_violations_name_the_argument() {
        // GIVEN
        let digits = Regex::new(r"^[0-9]+$").unwrap();
        let zip = "abc";

        // WHEN
        let err = expect_invalid_argument(arg!(zip).matches(&digits));

        // THEN
        assert_eq!(err.name(), "zip");
        assert!(err.message().contains("zip"));
        assert!(err.message().contains("^[0-9]+$"));
    }
}
