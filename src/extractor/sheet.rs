// ==========================================
// Business Analytics - sheet loading
// ==========================================
// Turns the first worksheet of an Excel workbook, or a CSV file with
// the same layout, into a row/column grid of normalized cells.
// ==========================================

use std::fs::File;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use csv::ReaderBuilder;

use crate::extractor::cell::Cell;
use crate::extractor::error::{ExtractError, ExtractResult};

/// In-memory grid of one sheet, indices sheet-absolute.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    rows: Vec<Vec<Cell>>,
}

impl SheetTable {
    /// Open a file by extension: `.xlsx`/`.xls` via calamine, `.csv`
    /// via the csv reader.
    pub fn open(path: &Path) -> ExtractResult<Self> {
        if !path.exists() {
            return Err(ExtractError::FileNotFound(path.display().to_string()));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "xlsx" | "xls" => Self::from_workbook(path),
            "csv" => Self::from_csv(path),
            _ => Err(ExtractError::UnsupportedFormat(ext)),
        }
    }

    /// Read the first worksheet of an Excel workbook.
    pub fn from_workbook(path: &Path) -> ExtractResult<Self> {
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| ExtractError::WorkbookParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names.first().cloned().ok_or(ExtractError::EmptyWorkbook)?;

        let range: Range<Data> = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ExtractError::WorkbookParseError(e.to_string()))?;

        tracing::debug!(
            sheet = %sheet_name,
            rows = range.height(),
            cols = range.width(),
            "worksheet loaded"
        );

        // calamine trims leading empty rows/columns from the range;
        // pad them back so indices match the sheet.
        let (row_offset, col_offset) = range.start().unwrap_or((0, 0));

        let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset as usize];
        for data_row in range.rows() {
            let mut row: Vec<Cell> = vec![Cell::Empty; col_offset as usize];
            row.extend(data_row.iter().map(Cell::from));
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Read a CSV file laid out like the workbook sheet (same reserved
    /// header rows, same column titles).
    pub fn from_csv(path: &Path) -> ExtractResult<Self> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row: Vec<Cell> = record
                .iter()
                .map(|value| {
                    let trimmed = value.trim();
                    if trimmed.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(trimmed.to_string())
                    }
                })
                .collect();
            rows.push(row);
        }

        Ok(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (row, col); out-of-range positions read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&Cell::Empty)
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_open_missing_file() {
        let result = SheetTable::open(Path::new("no_such_file.xlsx"));
        assert!(matches!(result, Err(ExtractError::FileNotFound(_))));
    }

    #[test]
    fn test_open_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        let result = SheetTable::open(file.path());
        assert!(matches!(result, Err(ExtractError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_csv_preserves_all_rows() {
        let file = csv_file("Report 2025\n,,\nClient,Amount\nAcme,100\n");
        let table = SheetTable::from_csv(file.path()).unwrap();

        assert_eq!(table.row_count(), 4);
        assert_eq!(table.cell(2, 0).as_text(), "Client");
        assert_eq!(table.cell(3, 0).as_text(), "Acme");
        assert_eq!(table.cell(3, 1).as_number(), 100.0);
    }

    #[test]
    fn test_out_of_range_cell_is_empty() {
        let file = csv_file("a,b\n");
        let table = SheetTable::from_csv(file.path()).unwrap();

        assert!(table.cell(0, 99).is_empty());
        assert!(table.cell(99, 0).is_empty());
    }
}
