//! Canonical data structure for a single extracted row.
//!
//! Records are semi-structured: the column set is not known until a file is
//! loaded, and later records may miss columns that the first record has.
//! Every accessor therefore tolerates absent keys.

use std::borrow::Cow;
use std::cmp::Ordering;

use indexmap::IndexMap;

/// A single field value.
///
/// Flat fields are plain text. A field element with child elements becomes a
/// [`Value::Map`] of its children (one flattening level); a child tag that
/// repeats within the same field collapses to a [`Value::List`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
}

impl Value {
    /// The display-string form of a value: text as-is, maps and lists
    /// rendered as their JSON form. Search and table cells both use this.
    pub fn to_display(&self) -> Cow<'_, str> {
        match self {
            Value::Text(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(serde_json::to_string(other).unwrap_or_default()),
        }
    }
}

/// One flattened row of extracted data: an ordered mapping from column name
/// to [`Value`]. Field order follows child order in the source element.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. Re-inserting an existing key overwrites the value but
    /// keeps the key's original position (last occurrence wins).
    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.fields.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The display text for a cell, or the empty string for a missing column.
    pub fn cell_text(&self, column: &str) -> String {
        self.get(column)
            .map(|v| v.to_display().into_owned())
            .unwrap_or_default()
    }

    /// True iff any field's display string contains `term_lower`,
    /// case-insensitively. The empty term matches every record.
    pub fn matches_search(&self, term_lower: &str) -> bool {
        if term_lower.is_empty() {
            return true;
        }
        self.fields
            .values()
            .any(|v| v.to_display().to_lowercase().contains(term_lower))
    }
}

/// Total order over possibly-missing field values, used by the sort step.
///
/// Text compares lexicographically. Any other pairing — mixed types, nested
/// values, or a missing key — resolves to `Equal` rather than failing. This
/// is a known approximation: it keeps sorting total over arbitrary records.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Text(x)), Some(Value::Text(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        let mut r = Record::new();
        for (k, v) in pairs {
            r.insert(*k, Value::Text((*v).to_string()));
        }
        r
    }

    #[test]
    fn duplicate_insert_overwrites_but_keeps_position() {
        let mut r = Record::new();
        r.insert("a", Value::Text("1".into()));
        r.insert("b", Value::Text("2".into()));
        r.insert("a", Value::Text("3".into()));
        assert_eq!(r.columns().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(r.cell_text("a"), "3");
    }

    #[test]
    fn nested_values_display_as_json() {
        let mut map = IndexMap::new();
        map.insert("inner".to_string(), Value::Text("x".into()));
        let v = Value::Map(map);
        assert_eq!(v.to_display(), r#"{"inner":"x"}"#);

        let list = Value::List(vec![Value::Text("a".into()), Value::Text("b".into())]);
        assert_eq!(list.to_display(), r#"["a","b"]"#);
    }

    #[test]
    fn search_is_case_insensitive_and_spans_all_fields() {
        let r = record(&[("Name", "Widget"), ("Amount", "42")]);
        assert!(r.matches_search("widget"));
        assert!(r.matches_search("42"));
        assert!(!r.matches_search("gadget"));
        assert!(r.matches_search(""));
    }

    #[test]
    fn search_sees_json_form_of_nested_values() {
        let mut r = Record::new();
        let mut map = IndexMap::new();
        map.insert("City".to_string(), Value::Text("Lisbon".into()));
        r.insert("Address", Value::Map(map));
        assert!(r.matches_search("lisbon"));
    }

    #[test]
    fn mixed_type_comparison_is_equal_and_never_panics() {
        let text = Value::Text("abc".into());
        let list = Value::List(vec![]);
        assert_eq!(compare_values(Some(&text), Some(&list)), Ordering::Equal);
        assert_eq!(compare_values(None, Some(&text)), Ordering::Equal);
        assert_eq!(compare_values(None, None), Ordering::Equal);
    }

    #[test]
    fn text_comparison_is_lexicographic() {
        let a = Value::Text("apple".into());
        let b = Value::Text("banana".into());
        assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Less);
    }
}
