//! # Spreadsheet Utility Module
//!
//! Cell addressing, dynamic value coercion, and worksheet binding for
//! record types, plus a thin reader over the calamine library that turns
//! worksheet rows into strongly-typed records. Everything here is a pure
//! transformation of its inputs; nothing is cached or shared between
//! calls.
pub mod reader;
pub mod record;
pub mod reference;
pub mod value;

pub use reader::{FromSheetRow, Row, SheetError, Workbook};
pub use record::{sheet_name_of, SheetRecord};
pub use reference::{cell_position, column_index, column_label};
pub use value::{CellValue, CoerceError, FromCellText, TargetKind};
