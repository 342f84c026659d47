use serde::{Deserialize, Serialize};

/// One extracted table: a fixed header plus data rows with verbatim cell
/// text. Also serves as the run-wide aggregate, which keeps the header of
/// the first page and appends later pages' rows in page order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HighlightTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl HighlightTable {
    /// Number of data rows (the header is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append another page's rows, keeping this table's header.
    pub fn append(&mut self, other: HighlightTable) {
        self.rows.extend(other.rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(header: &str, values: &[&str]) -> HighlightTable {
        HighlightTable {
            headers: vec![header.to_string()],
            rows: values.iter().map(|v| vec![v.to_string()]).collect(),
        }
    }

    #[test]
    fn test_append_preserves_order_and_header() {
        let mut first = table("Date", &["a", "b"]);
        let second = table("Other", &["c"]);

        first.append(second);

        assert_eq!(first.headers, vec!["Date"]);
        assert_eq!(first.row_count(), 3);
        assert_eq!(first.rows[2], vec!["c"]);
    }
}
