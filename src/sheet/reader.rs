//! Reads worksheet rows into strongly-typed records.
//!
//! The byte-level spreadsheet formats are owned entirely by the calamine
//! library; this module wraps its readers, renders each cell to raw text,
//! and runs the text through the value coercer to fill record fields.
use crate::sheet::record::SheetRecord;
use crate::sheet::reference::cell_position;
use crate::sheet::value::{CoerceError, FromCellText};
use calamine::{
    open_workbook, Data, Ods, OdsError, Range, Reader, Xls, XlsError, Xlsx, XlsxError,
};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use thiserror::Error;

/// Errors raised while opening workbooks and materializing records.
#[derive(Error, Debug)]
pub enum SheetError {
    /// Error in Excel 2007+ format (.xlsx, .xlsm, .xlam)
    #[error("Invalid xlsx file format: {0}")]
    InvalidXlsxFileFormat(#[from] XlsxError),

    /// Error in legacy Excel format (.xls, .xla)
    #[error("Invalid xls file format: {0}")]
    InvalidXlsFileFormat(#[from] XlsError),

    /// Error in OpenDocument format (.ods)
    #[error("Invalid ods file format: {0}")]
    InvalidOdsFileFormat(#[from] OdsError),

    /// Unsupported or unrecognized file format
    #[error("Cannot detect file format for '{name}'")]
    InvalidFileFormat { name: String },

    /// The worksheet a record type resolves to does not exist
    #[error("Sheet '{name}' not found")]
    SheetNotFound { name: String },

    /// A record field maps to a column past the end of the row
    #[error("Missing field at '{position}'")]
    MissingField { position: String },

    /// A cell's text could not be coerced into the record field's type
    #[error("Invalid cell value at '{position}': {source}")]
    InvalidCellValue {
        position: String,
        source: CoerceError,
    },
}

/// Type alias for buffered file reader
pub type FileReader = BufReader<File>;

/// Unified wrapper over the calamine readers for the supported on-disk
/// formats. Format detection follows the file extension.
pub enum Workbook {
    /// Excel 2007+ format reader (.xlsx, .xlsm, .xlam)
    Xlsx(Xlsx<FileReader>),
    /// Legacy Excel format reader (.xls, .xla)
    Xls(Xls<FileReader>),
    /// OpenDocument format reader (.ods)
    Ods(Ods<FileReader>),
}

impl Workbook {
    /// Opens a spreadsheet file with the reader matching its extension.
    pub fn open<P>(path: P) -> Result<Workbook, SheetError>
    where
        P: AsRef<Path>,
    {
        match path.as_ref().extension().and_then(OsStr::to_str) {
            Some("xlsx") | Some("xlsm") | Some("xlam") => Ok(Self::Xlsx(open_workbook(path)?)),
            Some("xls") | Some("xla") => Ok(Self::Xls(open_workbook(path)?)),
            Some("ods") => Ok(Self::Ods(open_workbook(path)?)),
            _ => Err(SheetError::InvalidFileFormat {
                name: path.as_ref().to_string_lossy().to_string(),
            }),
        }
    }

    /// Returns the names of all sheets in the workbook.
    pub fn sheet_names(&self) -> Vec<String> {
        match self {
            Self::Xlsx(xlsx) => xlsx.sheet_names(),
            Self::Xls(xls) => xls.sheet_names(),
            Self::Ods(ods) => ods.sheet_names(),
        }
    }

    /// Reads every data row of the worksheet bound to `T` into records.
    pub fn read_records<T>(&mut self) -> Result<Vec<T>, SheetError>
    where
        T: SheetRecord + FromSheetRow,
    {
        match self {
            Self::Xlsx(xlsx) => read_records(xlsx),
            Self::Xls(xls) => read_records(xls),
            Self::Ods(ods) => read_records(ods),
        }
    }
}

/// Opens xlsx content from an in-memory or streamed byte source, for
/// callers that hold bytes rather than a file path.
pub fn open_xlsx<RS>(reader: RS) -> Result<Xlsx<RS>, SheetError>
where
    RS: Read + Seek,
{
    Ok(Xlsx::new(reader)?)
}

/// Reads the worksheet bound to `T` from any calamine reader.
///
/// The worksheet is chosen by [`SheetRecord::sheet_name`]; a record type
/// that resolves to the empty string has no worksheet to read from.
pub fn read_records<RS, R, T>(workbook: &mut R) -> Result<Vec<T>, SheetError>
where
    RS: Read + Seek,
    R: Reader<RS>,
    SheetError: From<R::Error>,
    T: SheetRecord + FromSheetRow,
{
    let name = T::sheet_name();
    if name.is_empty() || !workbook.sheet_names().contains(&name) {
        return Err(SheetError::SheetNotFound { name });
    }
    let range = workbook.worksheet_range(&name)?;
    records_from_range(&range)
}

/// Materializes records from an in-memory cell range.
///
/// The first row of the range is the header row and is skipped, as are
/// rows with no cell content.
pub fn records_from_range<T>(range: &Range<Data>) -> Result<Vec<T>, SheetError>
where
    T: FromSheetRow,
{
    let (start_row, start_column) = range
        .start()
        .map(|(row, column)| (row as usize, column as usize))
        .unwrap_or((0, 0));
    let mut records = Vec::new();
    for (offset, cells) in range.rows().enumerate().skip(1) {
        if cells.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        let row = Row {
            cells,
            row: start_row + offset + 1,
            column_offset: start_column,
        };
        records.push(T::from_row(&row)?);
    }
    Ok(records)
}

/// Materializes a record from one worksheet row.
pub trait FromSheetRow: Sized {
    fn from_row(row: &Row<'_>) -> Result<Self, SheetError>;
}

/// One worksheet row, addressed by 0-based column offsets.
pub struct Row<'a> {
    /// Cells of the row, leftmost column first
    cells: &'a [Data],
    /// 1-based row number, used for error positions
    row: usize,
    /// 0-based column the row's first cell sits in, for ranges that do not
    /// start at column A
    column_offset: usize,
}

impl Row<'_> {
    /// Raw text of the cell at `column`; empty cells and columns past the
    /// end of the row render as the empty string.
    pub fn text(&self, column: usize) -> String {
        self.cells.get(column).map(cell_text).unwrap_or_default()
    }

    /// Coerces the cell at `column` into the destination type.
    ///
    /// An empty cell yields the type's zero value, but a column the row
    /// does not have at all is a missing field; both that and coercion
    /// failures carry the Excel-style cell position.
    pub fn get<T: FromCellText>(&self, column: usize) -> Result<T, SheetError> {
        let position = || cell_position(self.column_offset + column + 1, self.row);
        let Some(cell) = self.cells.get(column) else {
            return Err(SheetError::MissingField {
                position: position(),
            });
        };
        T::from_cell_text(&cell_text(cell)).map_err(|source| SheetError::InvalidCellValue {
            position: position(),
            source,
        })
    }
}

/// Renders a calamine cell to the raw text the value coercer consumes.
fn cell_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(value) => value.to_owned(),
        Data::Bool(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => value.to_string(),
        Data::DateTime(value) => value.as_f64().to_string(),
        Data::DateTimeIso(value) => value.to_owned(),
        Data::DurationIso(value) => value.to_owned(),
        Data::Error(value) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: String,
        quantity: u32,
        price: f64,
        discontinued: bool,
    }

    impl SheetRecord for Item {}

    impl FromSheetRow for Item {
        fn from_row(row: &Row<'_>) -> Result<Self, SheetError> {
            Ok(Item {
                name: row.get(0)?,
                quantity: row.get(1)?,
                price: row.get(2)?,
                discontinued: row.get(3)?,
            })
        }
    }

    fn sample_range() -> Range<Data> {
        let mut range = Range::new((0, 0), (3, 3));
        range.set_value((0, 0), Data::String("name".to_owned()));
        range.set_value((0, 1), Data::String("quantity".to_owned()));
        range.set_value((0, 2), Data::String("price".to_owned()));
        range.set_value((0, 3), Data::String("discontinued".to_owned()));
        range.set_value((1, 0), Data::String("bolt".to_owned()));
        range.set_value((1, 1), Data::Int(40));
        range.set_value((1, 2), Data::Float(0.25));
        range.set_value((1, 3), Data::Bool(false));
        range.set_value((3, 0), Data::String("nut".to_owned()));
        range.set_value((3, 1), Data::String("12".to_owned()));
        range.set_value((3, 3), Data::String("T".to_owned()));
        range
    }

    #[test]
    fn records_skip_header_and_empty_rows() {
        let records: Vec<Item> = records_from_range(&sample_range()).unwrap();
        assert_eq!(
            records,
            vec![
                Item {
                    name: "bolt".to_owned(),
                    quantity: 40,
                    price: 0.25,
                    discontinued: false,
                },
                Item {
                    name: "nut".to_owned(),
                    quantity: 12,
                    price: 0.0,
                    discontinued: true,
                },
            ]
        );
    }

    #[test]
    fn coercion_errors_carry_cell_position() {
        let mut range = Range::new((0, 0), (1, 3));
        range.set_value((0, 0), Data::String("name".to_owned()));
        range.set_value((1, 0), Data::String("bolt".to_owned()));
        range.set_value((1, 1), Data::String("many".to_owned()));
        let result: Result<Vec<Item>, SheetError> = records_from_range(&range);
        match result {
            Err(SheetError::InvalidCellValue { position, .. }) => assert_eq!(position, "B2"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[derive(Debug, PartialEq)]
    struct Audit {
        note: String,
        flagged: bool,
    }

    impl FromSheetRow for Audit {
        fn from_row(row: &Row<'_>) -> Result<Self, SheetError> {
            Ok(Audit {
                note: row.get(0)?,
                flagged: row.get(10)?,
            })
        }
    }

    #[test]
    fn columns_past_row_end_are_missing_fields() {
        let mut range = Range::new((0, 0), (1, 0));
        range.set_value((0, 0), Data::String("note".to_owned()));
        range.set_value((1, 0), Data::String("checked".to_owned()));
        let result: Result<Vec<Audit>, SheetError> = records_from_range(&range);
        match result {
            Err(SheetError::MissingField { position }) => assert_eq!(position, "K2"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn row_text_rendering() {
        let cells = vec![
            Data::Empty,
            Data::Int(7),
            Data::Float(1.5),
            Data::Bool(true),
            Data::String("plain".to_owned()),
        ];
        let row = Row {
            cells: &cells,
            row: 1,
            column_offset: 0,
        };
        assert_eq!(row.text(0), "");
        assert_eq!(row.text(1), "7");
        assert_eq!(row.text(2), "1.5");
        assert_eq!(row.text(3), "true");
        assert_eq!(row.text(4), "plain");
        assert_eq!(row.text(9), "");
    }
}
