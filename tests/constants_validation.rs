//! Validates that compile-time constants are internally consistent.
#![allow(clippy::assertions_on_constants)]

use xmltab::util::constants::*;

#[test]
fn page_size_is_positive() {
    assert!(PAGE_SIZE > 0, "PAGE_SIZE must be > 0");
    assert!(PAGE_SIZE <= 1000, "PAGE_SIZE should stay display-sized");
}

#[test]
fn row_tag_is_populated() {
    assert!(!ROW_TAG.is_empty(), "ROW_TAG must not be empty");
    assert!(
        !ROW_TAG.contains(char::is_whitespace),
        "ROW_TAG must be a valid element name"
    );
}

#[test]
fn storage_keys_are_distinct() {
    assert!(!VISIBLE_COLUMNS_KEY.is_empty());
    assert!(!DARK_MODE_KEY.is_empty());
    assert_ne!(VISIBLE_COLUMNS_KEY, DARK_MODE_KEY);
}

#[test]
fn cell_truncation_is_bounded() {
    assert!(MAX_CELL_CHARS >= 20, "Truncating below 20 chars hides data");
    assert!(MAX_CELL_CHARS <= 10_000, "MAX_CELL_CHARS should be bounded");
}

#[test]
fn app_metadata_is_populated() {
    assert!(!APP_NAME.is_empty(), "APP_NAME must not be empty");
    assert!(!APP_VERSION.is_empty(), "APP_VERSION must not be empty");
}
