//! The query pipeline: sort, then search and filter, in one fixed order.
//!
//! [`view`] produces indices into the record list in display order, in the
//! manner of a filtered-indices table view: the master list is never
//! reordered or mutated.

use crate::core::record::{compare_values, Record};

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The active sort: one column and a direction. Absent means extraction order.
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Compute the display-ordered view of `records` as indices into the slice.
///
/// Steps, in this fixed order:
/// 1. stable-sort by `sort` (extraction order when absent);
/// 2. drop records not matching `search_term` (case-insensitive substring
///    over every field's display form; empty term matches everything);
/// 3. drop records whose `filter_column` value is missing or blank after
///    trimming.
///
/// Steps 2 and 3 are a single AND pass; survivor order comes from step 1.
/// Total over all inputs — nothing here can fail.
pub fn view(
    records: &[Record],
    sort: Option<&SortSpec>,
    filter_column: Option<&str>,
    search_term: &str,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..records.len()).collect();

    if let Some(spec) = sort {
        indices.sort_by(|&a, &b| {
            let ord = compare_values(
                records[a].get(&spec.column),
                records[b].get(&spec.column),
            );
            match spec.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    let term_lower = search_term.to_lowercase();
    indices.retain(|&i| {
        let record = &records[i];
        record.matches_search(&term_lower) && passes_filter(record, filter_column)
    });
    indices
}

/// Presence filter: with no filter column every record passes; otherwise the
/// record needs a non-blank value (after trimming) in that column.
fn passes_filter(record: &Record, filter_column: Option<&str>) -> bool {
    match filter_column {
        None => true,
        Some(column) => record
            .get(column)
            .map(|v| !v.to_display().trim().is_empty())
            .unwrap_or(false),
    }
}
