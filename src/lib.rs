//! # Sheet Records
//!
//! A utility layer for reading tabular spreadsheet data into strongly-typed
//! records, plus a data-access layer for an organizational hierarchy
//! (departments, department memberships, organization users).
//!
//! ## Features
//!
//! - **Cell addressing**: bijective base-26 column labels and Excel-style
//!   cell positions (`1` ↔ `"A"`, `27` ↔ `"AA"`, `(1, 5)` → `"A5"`)
//! - **Value coercion**: cell text into boolean, sized integer, floating
//!   point, or text values, with well-defined zero values for empty cells
//! - **Worksheet binding**: record types resolve the worksheet they are
//!   read from, either by self-reporting a name or by their type name
//! - **Typed reading**: worksheet rows materialize into record structs via
//!   the calamine library, with cell-accurate error positions
//! - **Organization storage**: create/update/delete/list operations over
//!   departments, memberships, and users behind a generic storage
//!   interface and a transaction wrapper
pub mod error;
pub mod organization;
pub mod sheet;

pub use error::SheetRecordsError;
