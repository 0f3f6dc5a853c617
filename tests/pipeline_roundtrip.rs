//! End-to-end pipeline tests: upload → extract → query → paginate.

use xmltab::core::columns::derive_columns;
use xmltab::core::extractor::extract;
use xmltab::core::paginator::{paginate, total_pages, PageCursor};
use xmltab::core::query::{view, SortSpec};
use xmltab::util::constants::PAGE_SIZE;

const SAMPLE_XML: &str = r#"<NewDataSet>
  <Table1>
    <Name>Widget</Name>
    <Amount>300</Amount>
  </Table1>
  <Table1>
    <Name>Gadget</Name>
    <Amount>100</Amount>
  </Table1>
  <Table1>
    <Name></Name>
    <Amount>200</Amount>
  </Table1>
</NewDataSet>"#;

#[test]
fn upload_yields_one_record_per_row() {
    let records = extract(SAMPLE_XML).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(derive_columns(&records), vec!["Name", "Amount"]);
}

#[test]
fn derive_columns_is_idempotent_and_order_stable() {
    let records = extract(SAMPLE_XML).unwrap();
    assert_eq!(derive_columns(&records), derive_columns(&records));
}

#[test]
fn searching_a_unique_amount_yields_exactly_that_record() {
    let records = extract(SAMPLE_XML).unwrap();
    let hits = view(&records, None, None, "100");
    assert_eq!(hits.len(), 1);
    assert_eq!(records[hits[0]].cell_text("Name"), "Gadget");
}

#[test]
fn sorting_descending_reverses_ascending() {
    let records = extract(SAMPLE_XML).unwrap();
    let asc = view(&records, Some(&SortSpec::ascending("Amount")), None, "");
    let desc = view(&records, Some(&SortSpec::descending("Amount")), None, "");
    assert_eq!(asc, vec![1, 2, 0]);
    let reversed: Vec<usize> = asc.into_iter().rev().collect();
    assert_eq!(desc, reversed);
}

#[test]
fn presence_filter_excludes_the_record_with_a_blank_name() {
    let records = extract(SAMPLE_XML).unwrap();
    let kept = view(&records, None, Some("Name"), "");
    assert_eq!(kept, vec![0, 1]);
}

#[test]
fn filtering_does_not_mutate_record_contents() {
    let records = extract(SAMPLE_XML).unwrap();
    let before: Vec<String> = records.iter().map(|r| r.cell_text("Amount")).collect();
    let _ = view(&records, Some(&SortSpec::descending("Name")), Some("Name"), "a");
    let after: Vec<String> = records.iter().map(|r| r.cell_text("Amount")).collect();
    assert_eq!(before, after);
}

#[test]
fn pages_reconstruct_the_view_exactly_once() {
    // 23 rows spread over 3 pages of 10.
    let mut xml = String::from("<NewDataSet>");
    for i in 0..23 {
        xml.push_str(&format!("<Table1><Id>{i}</Id></Table1>"));
    }
    xml.push_str("</NewDataSet>");

    let records = extract(&xml).unwrap();
    let indices = view(&records, None, None, "");

    let pages = total_pages(indices.len(), PAGE_SIZE);
    assert_eq!(pages, 3);

    let mut rebuilt = Vec::new();
    for page in 1..=pages {
        let slice = paginate(&indices, page, PAGE_SIZE);
        assert!(slice.len() <= PAGE_SIZE);
        rebuilt.extend_from_slice(slice);
    }
    assert_eq!(rebuilt, indices);
}

/// The page cursor resets to page 1 whenever a view-changing control is
/// applied. This is a deliberate choice: without it, narrowing the view
/// from page 3 would land on an out-of-range (empty) page.
#[test]
fn page_cursor_resets_to_first_page_when_the_view_narrows() {
    let mut xml = String::from("<NewDataSet>");
    for i in 0..23 {
        xml.push_str(&format!("<Table1><Id>{i}</Id></Table1>"));
    }
    xml.push_str("</NewDataSet>");
    let records = extract(&xml).unwrap();

    let mut cursor = PageCursor::new();
    let full = view(&records, None, None, "");
    cursor.next(total_pages(full.len(), PAGE_SIZE));
    cursor.next(total_pages(full.len(), PAGE_SIZE));
    assert_eq!(cursor.current(), 3);

    // Search narrows the view to one record; the stale cursor would point
    // past the end (an empty slice, with bounds still correct)...
    let narrowed = view(&records, None, None, "22");
    assert_eq!(narrowed.len(), 1);
    assert!(paginate(&narrowed, cursor.current(), PAGE_SIZE).is_empty());
    assert_eq!(total_pages(narrowed.len(), PAGE_SIZE), 1);

    // ...so every view-changing action resets the cursor.
    cursor.reset();
    assert_eq!(paginate(&narrowed, cursor.current(), PAGE_SIZE), &narrowed[..]);
}

#[test]
fn empty_document_displays_as_a_single_empty_page() {
    let records = extract("<NewDataSet></NewDataSet>").unwrap();
    assert!(records.is_empty());
    assert!(derive_columns(&records).is_empty());

    let indices = view(&records, None, None, "");
    assert_eq!(total_pages(indices.len(), PAGE_SIZE), 1);
    assert!(paginate(&indices, 1, PAGE_SIZE).is_empty());
}
