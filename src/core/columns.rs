//! Column registry: the derived column set and its visible/excluded split.
//!
//! The column set is established from the first extracted record only.
//! [`VisibilityState`] partitions it into an ordered `visible` and `excluded`
//! sequence; every column belongs to exactly one side at all times.
//!
//! The visible half is persisted through the [`ColumnStore`] port so that
//! hidden columns stay hidden across application restarts.

use std::collections::HashMap;

use crate::core::record::Record;
use crate::util::constants;

/// Key-value port for the persisted visible-column snapshot.
///
/// The application adapts `eframe::Storage` to this trait; tests inject
/// [`MemoryStore`].
pub trait ColumnStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory [`ColumnStore`] for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColumnStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Derive the column set from the first record: its keys in insertion order,
/// or an empty sequence when there are no records. Calling this twice on the
/// same records is idempotent and order-stable.
pub fn derive_columns(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|r| r.columns().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Decode a persisted snapshot (a JSON array of column names).
pub fn decode_snapshot(json: &str) -> Option<Vec<String>> {
    serde_json::from_str(json).ok()
}

/// Encode a visible-column list as a JSON snapshot.
pub fn encode_snapshot(visible: &[String]) -> String {
    serde_json::to_string(visible).unwrap_or_else(|_| "[]".to_string())
}

/// Read and decode the stored visible-column snapshot, if any.
pub fn load_visible(store: &dyn ColumnStore) -> Option<Vec<String>> {
    store
        .get(constants::VISIBLE_COLUMNS_KEY)
        .as_deref()
        .and_then(decode_snapshot)
}

/// Partition of the column set into visible and excluded columns.
///
/// Invariant: `visible ∪ excluded == all` and the two are disjoint; both
/// hold after every [`toggle`](Self::toggle).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibilityState {
    all: Vec<String>,
    visible: Vec<String>,
    excluded: Vec<String>,
}

impl VisibilityState {
    /// All columns visible.
    pub fn from_columns(all: Vec<String>) -> Self {
        Self {
            visible: all.clone(),
            excluded: Vec::new(),
            all,
        }
    }

    /// Rebuild a partition from a stored visible-column snapshot.
    ///
    /// Visible columns keep the column-set order regardless of the order
    /// they were stored in. A missing snapshot — or one that matches none of
    /// the current columns — degrades to "all visible" rather than showing
    /// an empty table.
    pub fn restore(all: Vec<String>, stored: Option<&[String]>) -> Self {
        let Some(stored) = stored else {
            return Self::from_columns(all);
        };
        let visible: Vec<String> = all
            .iter()
            .filter(|c| stored.iter().any(|s| s == *c))
            .cloned()
            .collect();
        if visible.is_empty() {
            return Self::from_columns(all);
        }
        let excluded: Vec<String> = all
            .iter()
            .filter(|c| !stored.iter().any(|s| s == *c))
            .cloned()
            .collect();
        Self {
            all,
            visible,
            excluded,
        }
    }

    pub fn all(&self) -> &[String] {
        &self.all
    }

    pub fn visible(&self) -> &[String] {
        &self.visible
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// Move a column to the other side of the partition.
    ///
    /// Hiding appends to the end of `excluded`. Showing re-inserts into
    /// `visible` at the position that restores the column's relative order
    /// within the full column set, even when earlier columns are also
    /// hidden. Unknown columns are ignored.
    pub fn toggle(&mut self, column: &str) {
        if let Some(pos) = self.visible.iter().position(|c| c == column) {
            let col = self.visible.remove(pos);
            self.excluded.push(col);
        } else if let Some(pos) = self.excluded.iter().position(|c| c == column) {
            let col = self.excluded.remove(pos);
            let rank = self.rank(column);
            let insert_at = self
                .visible
                .iter()
                .filter(|v| self.rank(v.as_str()) < rank)
                .count();
            self.visible.insert(insert_at, col);
        }
    }

    /// Write the current visible list to the store.
    pub fn persist(&self, store: &mut dyn ColumnStore) {
        store.set(
            constants::VISIBLE_COLUMNS_KEY,
            encode_snapshot(&self.visible),
        );
    }

    /// Position of a column in the full column set; unknown columns sort last.
    fn rank(&self, column: &str) -> usize {
        self.all
            .iter()
            .position(|c| c == column)
            .unwrap_or(self.all.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn assert_partition(state: &VisibilityState) {
        let mut union: Vec<&String> = state.visible().iter().chain(state.excluded()).collect();
        union.sort();
        let mut all: Vec<&String> = state.all().iter().collect();
        all.sort();
        assert_eq!(union, all, "visible ∪ excluded must equal the column set");
        for c in state.visible() {
            assert!(
                !state.excluded().contains(c),
                "{c} must not be on both sides"
            );
        }
    }

    #[test]
    fn toggle_preserves_partition_invariant() {
        let mut state = VisibilityState::from_columns(cols(&["a", "b", "c", "d"]));
        for column in ["b", "d", "b", "a", "d"] {
            state.toggle(column);
            assert_partition(&state);
        }
    }

    #[test]
    fn hide_appends_to_excluded() {
        let mut state = VisibilityState::from_columns(cols(&["a", "b", "c"]));
        state.toggle("a");
        state.toggle("c");
        assert_eq!(state.excluded(), cols(&["a", "c"]));
        assert_eq!(state.visible(), cols(&["b"]));
    }

    #[test]
    fn show_restores_original_relative_order() {
        let mut state = VisibilityState::from_columns(cols(&["a", "b", "c"]));
        state.toggle("b");
        state.toggle("b");
        assert_eq!(state.visible(), cols(&["a", "b", "c"]));
    }

    #[test]
    fn show_restores_order_when_earlier_columns_are_hidden() {
        let mut state = VisibilityState::from_columns(cols(&["a", "b", "c"]));
        state.toggle("a");
        state.toggle("b");
        // Only "c" is visible; restoring "b" must land before it.
        state.toggle("b");
        assert_eq!(state.visible(), cols(&["b", "c"]));
    }

    #[test]
    fn unknown_column_is_ignored() {
        let mut state = VisibilityState::from_columns(cols(&["a"]));
        state.toggle("nope");
        assert_eq!(state.visible(), cols(&["a"]));
        assert!(state.excluded().is_empty());
    }

    #[test]
    fn restore_without_snapshot_shows_everything() {
        let state = VisibilityState::restore(cols(&["a", "b"]), None);
        assert_eq!(state.visible(), cols(&["a", "b"]));
    }

    #[test]
    fn restore_filters_snapshot_to_current_columns() {
        let stored = cols(&["c", "a", "stale"]);
        let state = VisibilityState::restore(cols(&["a", "b", "c"]), Some(&stored));
        // Column-set order wins over snapshot order.
        assert_eq!(state.visible(), cols(&["a", "c"]));
        assert_eq!(state.excluded(), cols(&["b"]));
    }

    #[test]
    fn restore_with_disjoint_snapshot_degrades_to_all_visible() {
        let stored = cols(&["x", "y"]);
        let state = VisibilityState::restore(cols(&["a", "b"]), Some(&stored));
        assert_eq!(state.visible(), cols(&["a", "b"]));
    }

    #[test]
    fn persist_roundtrip_through_memory_store() {
        let mut store = MemoryStore::new();
        let mut state = VisibilityState::from_columns(cols(&["a", "b", "c"]));
        state.toggle("b");
        state.persist(&mut store);

        let stored = load_visible(&store).unwrap();
        assert_eq!(stored, cols(&["a", "c"]));

        let restored = VisibilityState::restore(cols(&["a", "b", "c"]), Some(&stored));
        assert_eq!(restored, state);
    }
}
