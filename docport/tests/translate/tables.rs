//! Table translation tests: capacity comes from the first row, later rows
//! are clipped to it, and malformed cells never take the table down.

use docport::convert_str;
use docport::docx::{Block, DocxDocument, Table};

fn single_table(doc: &DocxDocument) -> &Table {
    let tables: Vec<_> = doc
        .blocks()
        .iter()
        .filter_map(|block| match block {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        })
        .collect();
    assert_eq!(tables.len(), 1, "expected exactly one table");
    tables[0]
}

#[test]
fn first_row_establishes_column_capacity() {
    let doc = convert_str(
        "<table>\
         <tr><th>A</th><th>B</th><th>C</th></tr>\
         <tr><td>1</td><td>2</td><td>3</td></tr>\
         </table>",
    )
    .unwrap();
    let table = single_table(&doc);

    assert_eq!(table.columns, 3);
    // The capacity row itself emits no data row.
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].cells, vec!["1", "2", "3"]);
}

#[test]
fn extra_cells_beyond_capacity_are_dropped() {
    let doc = convert_str(
        "<table>\
         <tr><th>A</th><th>B</th><th>C</th></tr>\
         <tr><td>1</td><td>2</td><td>3</td><td>4</td></tr>\
         </table>",
    )
    .unwrap();
    let table = single_table(&doc);

    // The fourth source cell is dropped without failing the row.
    assert_eq!(table.columns, 3);
    assert_eq!(table.rows[0].cells, vec!["1", "2", "3"]);
}

#[test]
fn short_rows_leave_trailing_cells_empty() {
    let doc = convert_str(
        "<table>\
         <tr><td>A</td><td>B</td></tr>\
         <tr><td>only</td></tr>\
         </table>",
    )
    .unwrap();
    let table = single_table(&doc);

    assert_eq!(table.rows[0].cells, vec!["only", ""]);
}

#[test]
fn rows_nested_in_thead_and_tbody_are_found() {
    let doc = convert_str(
        "<table>\
         <thead><tr><th>H1</th><th>H2</th></tr></thead>\
         <tbody><tr><td>a</td><td>b</td></tr></tbody>\
         </table>",
    )
    .unwrap();
    let table = single_table(&doc);

    assert_eq!(table.columns, 2);
    assert_eq!(table.rows[0].cells, vec!["a", "b"]);
}

#[test]
fn data_cells_win_when_a_row_mixes_td_and_th() {
    let doc = convert_str(
        "<table>\
         <tr><td>c1</td><td>c2</td></tr>\
         <tr><td>data</td><th>header</th></tr>\
         </table>",
    )
    .unwrap();
    let table = single_table(&doc);

    // A row is never treated as having both kinds: td shadows th.
    assert_eq!(table.rows[0].cells, vec!["data", ""]);
}

#[test]
fn table_with_no_rows_is_an_empty_shell() {
    let doc = convert_str("<table></table>").unwrap();
    let table = single_table(&doc);

    assert_eq!(table.columns, 0);
    assert!(table.rows.is_empty());
}

#[test]
fn cell_markup_is_flattened_and_sanitized() {
    let doc = convert_str(
        "<table>\
         <tr><td>cap</td></tr>\
         <tr><td><b>bo\u{0003}ld</b> tail</td></tr>\
         </table>",
    )
    .unwrap();
    let table = single_table(&doc);

    assert_eq!(table.rows[0].cells, vec!["bold tail"]);
}
