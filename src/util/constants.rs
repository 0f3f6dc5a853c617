//! Application-wide constants for XmlTab.
//!
//! Centralising magic numbers and configuration defaults here keeps the rest
//! of the codebase clean and makes tuning straightforward.

/// Tag name of the repeated row element in the expected XML schema.
/// Every element with this name, anywhere in the document, becomes one record.
pub const ROW_TAG: &str = "Table1";

/// Number of records shown per table page.
pub const PAGE_SIZE: usize = 10;

/// Storage key under which the visible-column snapshot is persisted.
/// The value is a JSON-encoded array of column names.
pub const VISIBLE_COLUMNS_KEY: &str = "visible_columns";

/// Storage key for the dark-mode preference.
pub const DARK_MODE_KEY: &str = "dark_mode";

/// Row height in the data table (in logical pixels).
pub const TABLE_ROW_HEIGHT: f32 = 24.0;

/// Maximum number of characters shown per table cell before truncation.
/// Cell contents are display-only; the underlying record is never trimmed.
pub const MAX_CELL_CHARS: usize = 200;

/// Application display name used in titles, dialogs, etc.
pub const APP_NAME: &str = "XmlTab";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
