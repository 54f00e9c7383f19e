//! CSV building for the "Exporter" button of master lists.
//!
//! The frontend wraps the result in a Blob and triggers the download.

/// A record that can be written as one CSV row.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

const SEPARATOR: &str = ";";

/// Builds a `;`-separated CSV document with a UTF-8 BOM so that
/// spreadsheet tools pick up accented characters.
pub fn to_csv<T: CsvExportable>(rows: &[T]) -> String {
    let mut csv = String::new();
    csv.push('\u{FEFF}');
    csv.push_str(&T::headers().join(SEPARATOR));
    csv.push('\n');

    for row in rows {
        let cells: Vec<String> = row.to_csv_row().iter().map(|c| escape_csv_cell(c)).collect();
        csv.push_str(&cells.join(SEPARATOR));
        csv.push('\n');
    }
    csv
}

/// Quotes a cell containing the separator, quotes or line breaks.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(&'static str, f64);

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Libellé", "Montant"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_header_and_bom() {
        let csv = to_csv::<Line>(&[]);
        assert_eq!(csv, "\u{FEFF}Libellé;Montant\n");
    }

    #[test]
    fn test_cells_are_escaped() {
        let csv = to_csv(&[Line("Loyer; siège", 1.5), Line("Dit \"urgent\"", 2.0)]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "\"Loyer; siège\";1.5");
        assert_eq!(lines[2], "\"Dit \"\"urgent\"\"\";2");
    }
}
