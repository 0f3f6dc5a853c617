//! XML-to-record extraction.
//!
//! Converts the raw text of an uploaded file into an ordered sequence of
//! [`Record`]s. Uses `roxmltree` for fast, zero-allocation-friendly XML
//! parsing.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::core::record::{Record, Value};
use crate::util::constants;
use crate::util::error::XmlTabError;

/// Parse `raw` as XML and extract one [`Record`] per row element.
///
/// The expected schema is a root containing repeated elements named
/// [`constants::ROW_TAG`], each with flat child elements representing fields:
/// ```xml
/// <NewDataSet>
///   <Table1>
///     <Name>Widget</Name>
///     <Amount>42</Amount>
///   </Table1>
///   ...
/// </NewDataSet>
/// ```
///
/// Record keys are the tag names of each row's immediate children, in
/// document order; a duplicate child tag overwrites the earlier value (last
/// occurrence wins). A document with zero row elements yields an empty
/// sequence, not an error.
///
/// # Errors
/// Returns [`XmlTabError::XmlParse`] if the text is not well-formed XML.
pub fn extract(raw: &str) -> Result<Vec<Record>, XmlTabError> {
    let doc = roxmltree::Document::parse(raw)
        .map_err(|e| XmlTabError::XmlParse(format!("Failed to parse XML: {e}")))?;

    let records: Vec<Record> = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == constants::ROW_TAG)
        .map(|row| build_record(&row))
        .collect();

    tracing::debug!("Extracted {} records", records.len());
    Ok(records)
}

/// Build one record from a row element's immediate children.
fn build_record(row: &roxmltree::Node) -> Record {
    let mut record = Record::new();
    for child in row.children().filter(|n| n.is_element()) {
        record.insert(child.tag_name().name(), field_value(&child));
    }
    record
}

/// Convert a field element into a [`Value`], flattening one level.
///
/// A field with no element children is its text content. A field with
/// element children becomes a map of child tag to text; a child tag that
/// repeats within the field collapses to a list. Anything deeper is
/// flattened into text content.
fn field_value(field: &roxmltree::Node) -> Value {
    let children: Vec<_> = field.children().filter(|n| n.is_element()).collect();
    if children.is_empty() {
        return Value::Text(collect_text(field));
    }

    let mut map: IndexMap<String, Value> = IndexMap::new();
    for child in children {
        let name = child.tag_name().name().to_string();
        let text = Value::Text(collect_text(&child));
        match map.entry(name) {
            Entry::Occupied(mut entry) => match entry.get_mut() {
                Value::List(items) => items.push(text),
                existing => {
                    let first = existing.clone();
                    *existing = Value::List(vec![first, text]);
                }
            },
            Entry::Vacant(entry) => {
                entry.insert(text);
            }
        }
    }
    Value::Map(map)
}

/// Collect all text content from a node and its descendants.
fn collect_text(node: &roxmltree::Node) -> String {
    let mut text = String::new();
    for desc in node.descendants() {
        if desc.is_text() {
            if let Some(t) = desc.text() {
                text.push_str(t);
            }
        }
    }
    text.trim().to_string()
}
