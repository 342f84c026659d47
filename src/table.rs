//! Extraction of the first HTML table on a rendered listing page.

use crate::models::HighlightTable;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Structural problems with a table that is present but unusable.
///
/// A missing table is not an error; it is the pagination end signal and is
/// reported as `Ok(None)`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("table contains no rows")]
    NoRows,

    #[error("table header row contains no cells")]
    NoHeaderCells,
}

/// Parse the markup and convert the first `<table>` in document order.
///
/// The first row supplies the column headers (whether it uses `<th>` or
/// plain `<td>` cells) and every following row becomes one data record,
/// cell text taken verbatim.
pub fn extract_table(html: &str) -> Result<Option<HighlightTable>, ExtractError> {
    let document = Html::parse_document(html);

    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();

    let table = match document.select(&table_selector).next() {
        Some(table) => table,
        None => return Ok(None),
    };

    let mut rows = table.select(&row_selector);

    let header_row = rows.next().ok_or(ExtractError::NoRows)?;
    let headers: Vec<String> = header_row
        .select(&cell_selector)
        .map(cell_text)
        .collect();
    if headers.is_empty() {
        return Err(ExtractError::NoHeaderCells);
    }

    let data: Vec<Vec<String>> = rows
        .map(|row| row.select(&cell_selector).map(cell_text).collect())
        .filter(|cells: &Vec<String>| !cells.is_empty())
        .collect();

    Ok(Some(HighlightTable {
        headers,
        rows: data,
    }))
}

/// Rendered text of one cell: all text nodes joined, whitespace collapsed
fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_th_headers_and_data_rows() {
        let html = r#"
            <html><body>
            <table>
                <thead><tr><th>Date</th><th>City</th><th>Shape</th></tr></thead>
                <tbody>
                    <tr><td>2024-01-05</td><td>Phoenix</td><td>Light</td></tr>
                    <tr><td>2024-01-06</td><td>Roswell</td><td>Disk</td></tr>
                </tbody>
            </table>
            </body></html>
        "#;

        let table = extract_table(html).unwrap().unwrap();
        assert_eq!(table.headers, vec!["Date", "City", "Shape"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0], vec!["2024-01-05", "Phoenix", "Light"]);
        assert_eq!(table.rows[1], vec!["2024-01-06", "Roswell", "Disk"]);
    }

    #[test]
    fn test_td_only_first_row_becomes_header() {
        let html = r#"
            <table>
                <tr><td>Date</td><td>City</td></tr>
                <tr><td>2024-02-01</td><td>Area 51</td></tr>
            </table>
        "#;

        let table = extract_table(html).unwrap().unwrap();
        assert_eq!(table.headers, vec!["Date", "City"]);
        assert_eq!(table.rows, vec![vec!["2024-02-01", "Area 51"]]);
    }

    #[test]
    fn test_no_table_is_the_end_signal() {
        let html = "<html><body><p>No more results.</p></body></html>";
        assert_eq!(extract_table(html).unwrap(), None);
    }

    #[test]
    fn test_only_first_table_is_read() {
        let html = r#"
            <table><tr><th>A</th></tr><tr><td>first</td></tr></table>
            <table><tr><th>B</th></tr><tr><td>second</td></tr></table>
        "#;

        let table = extract_table(html).unwrap().unwrap();
        assert_eq!(table.headers, vec!["A"]);
        assert_eq!(table.rows, vec![vec!["first"]]);
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let html = "<table></table>";
        assert_eq!(extract_table(html), Err(ExtractError::NoRows));
    }

    #[test]
    fn test_header_row_without_cells_is_an_error() {
        let html = "<table><tr></tr></table>";
        assert_eq!(extract_table(html), Err(ExtractError::NoHeaderCells));
    }

    #[test]
    fn test_header_only_table_has_zero_rows() {
        let html = "<table><tr><th>Date</th><th>City</th></tr></table>";
        let table = extract_table(html).unwrap().unwrap();
        assert_eq!(table.headers, vec!["Date", "City"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_nested_markup_text_is_collapsed() {
        let html = r#"
            <table>
                <tr><th>Report</th></tr>
                <tr><td>  <a href="/sighting/1">Bright   light</a>
                    over the bay </td></tr>
            </table>
        "#;

        let table = extract_table(html).unwrap().unwrap();
        assert_eq!(table.rows[0], vec!["Bright light over the bay"]);
    }
}
