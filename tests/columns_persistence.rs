//! Integration tests for the column registry and its persistence port.

use xmltab::core::columns::{
    derive_columns, load_visible, ColumnStore, MemoryStore, VisibilityState,
};
use xmltab::core::extractor::extract;
use xmltab::util::constants::VISIBLE_COLUMNS_KEY;

fn columns_of(xml: &str) -> Vec<String> {
    derive_columns(&extract(xml).unwrap())
}

#[test]
fn visibility_survives_a_restart_through_the_store() {
    let all = columns_of(
        "<r><Table1><A>1</A><B>2</B><C>3</C></Table1></r>",
    );

    // First session: hide B, persist.
    let mut store = MemoryStore::new();
    let mut state = VisibilityState::from_columns(all.clone());
    state.toggle("B");
    state.persist(&mut store);

    // Second session: restore from the stored snapshot.
    let stored = load_visible(&store);
    let restored = VisibilityState::restore(all, stored.as_deref());
    assert_eq!(restored.visible(), ["A", "C"]);
    assert_eq!(restored.excluded(), ["B"]);
}

#[test]
fn missing_snapshot_degrades_to_all_visible() {
    let store = MemoryStore::new();
    assert!(load_visible(&store).is_none());

    let all = columns_of("<r><Table1><A>1</A><B>2</B></Table1></r>");
    let state = VisibilityState::restore(all, None);
    assert_eq!(state.visible(), ["A", "B"]);
    assert!(state.excluded().is_empty());
}

#[test]
fn corrupt_snapshot_is_ignored() {
    let mut store = MemoryStore::new();
    store.set(VISIBLE_COLUMNS_KEY, "not json".to_string());
    assert!(load_visible(&store).is_none());
}

#[test]
fn every_toggle_sequence_keeps_the_partition_invariant() {
    let all = columns_of(
        "<r><Table1><A>1</A><B>2</B><C>3</C><D>4</D></Table1></r>",
    );
    let mut state = VisibilityState::from_columns(all.clone());

    for column in ["B", "C", "B", "A", "D", "C", "A"] {
        state.toggle(column);
        let mut union: Vec<&String> =
            state.visible().iter().chain(state.excluded()).collect();
        union.sort();
        let mut expected: Vec<&String> = all.iter().collect();
        expected.sort();
        assert_eq!(union, expected);
        for c in state.visible() {
            assert!(!state.excluded().contains(c));
        }
    }
}

#[test]
fn retoggling_restores_the_original_relative_order() {
    let all = columns_of(
        "<r><Table1><A>1</A><B>2</B><C>3</C></Table1></r>",
    );
    let mut state = VisibilityState::from_columns(all);

    state.toggle("B");
    assert_eq!(state.visible(), ["A", "C"]);
    state.toggle("B");
    assert_eq!(state.visible(), ["A", "B", "C"]);
}
