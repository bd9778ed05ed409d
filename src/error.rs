use thiserror::Error;

/// Crate-level error type.
/// Aggregates errors from the spreadsheet utilities and the organization
/// data-access layer so callers can hold a single error.
#[derive(Error, Debug)]
pub enum SheetRecordsError {
    #[error("{0}")]
    CoerceError(#[from] crate::sheet::value::CoerceError),

    #[error("{0}")]
    SheetError(#[from] crate::sheet::reader::SheetError),

    #[error("{0}")]
    OrganizationError(#[from] crate::organization::store::OrganizationError),
}
