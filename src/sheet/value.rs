use std::fmt::Display;
use thiserror::Error;

/// Errors raised while coercing cell text into a target kind.
#[derive(Error, Debug)]
pub enum CoerceError {
    /// Text could not be interpreted as the requested kind.
    #[error("parse '{text}' to {kind} error")]
    Parse { text: String, kind: TargetKind },

    /// The requested kind is outside the supported set.
    #[error("not supported kind '{0}'")]
    UnsupportedKind(String),
}

/// Target primitive kinds a cell's text can be coerced into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetKind {
    /// Boolean values (true/false)
    Bool,
    /// 8-bit signed integers
    Int8,
    /// 16-bit signed integers
    Int16,
    /// 32-bit signed integers
    Int32,
    /// 64-bit signed integers
    Int64,
    /// 8-bit unsigned integers
    Uint8,
    /// 16-bit unsigned integers
    Uint16,
    /// 32-bit unsigned integers
    Uint32,
    /// 64-bit unsigned integers
    Uint64,
    /// Single-precision floating point numbers
    Float32,
    /// Double-precision floating point numbers
    Float64,
    /// Variable-length strings
    Text,
}

/// A coerced cell value, tagged with the kind it was parsed as.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Text(String),
}

impl TargetKind {
    /// Returns the string representation of the target kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Text => "text",
        }
    }

    /// Parses a target kind from a string representation.
    /// Supports various aliases for each kind (case-insensitive).
    pub fn parse(name: &str) -> Result<Self, CoerceError> {
        match name.to_ascii_uppercase().as_str() {
            "BOOL" | "BOOLEAN" => Ok(Self::Bool),
            "INT8" | "TINYINT" => Ok(Self::Int8),
            "INT16" | "SMALLINT" => Ok(Self::Int16),
            "INT32" | "INT" | "INTEGER" => Ok(Self::Int32),
            "INT64" | "BIGINT" => Ok(Self::Int64),
            "UINT8" | "UTINYINT" => Ok(Self::Uint8),
            "UINT16" | "USMALLINT" => Ok(Self::Uint16),
            "UINT32" | "UINTEGER" => Ok(Self::Uint32),
            "UINT64" | "UBIGINT" => Ok(Self::Uint64),
            "FLOAT32" | "FLOAT" | "REAL" => Ok(Self::Float32),
            "FLOAT64" | "DOUBLE" => Ok(Self::Float64),
            "TEXT" | "STRING" | "VARCHAR" => Ok(Self::Text),
            _ => Err(CoerceError::UnsupportedKind(name.to_string())),
        }
    }

    /// Canonical zero value for the kind, used as the empty-cell default.
    pub fn zero(&self) -> CellValue {
        match self {
            Self::Bool => CellValue::Bool(false),
            Self::Int8 => CellValue::Int8(0),
            Self::Int16 => CellValue::Int16(0),
            Self::Int32 => CellValue::Int32(0),
            Self::Int64 => CellValue::Int64(0),
            Self::Uint8 => CellValue::Uint8(0),
            Self::Uint16 => CellValue::Uint16(0),
            Self::Uint32 => CellValue::Uint32(0),
            Self::Uint64 => CellValue::Uint64(0),
            Self::Float32 => CellValue::Float32(0.0),
            Self::Float64 => CellValue::Float64(0.0),
            Self::Text => CellValue::Text(String::new()),
        }
    }

    /// Coerces raw cell text into a value of this kind.
    ///
    /// Empty text is not an error: it yields [`TargetKind::zero`]. Numeric
    /// kinds parse base-10 at the requested width, so out-of-range text
    /// fails the same way malformed text does. Nothing is written on
    /// failure and no default is substituted.
    pub fn coerce(&self, text: &str) -> Result<CellValue, CoerceError> {
        if text.is_empty() {
            return Ok(self.zero());
        }
        match self {
            Self::Bool => parse_bool(text).map(CellValue::Bool),
            Self::Int8 => parse_number(text, *self).map(CellValue::Int8),
            Self::Int16 => parse_number(text, *self).map(CellValue::Int16),
            Self::Int32 => parse_number(text, *self).map(CellValue::Int32),
            Self::Int64 => parse_number(text, *self).map(CellValue::Int64),
            Self::Uint8 => parse_number(text, *self).map(CellValue::Uint8),
            Self::Uint16 => parse_number(text, *self).map(CellValue::Uint16),
            Self::Uint32 => parse_number(text, *self).map(CellValue::Uint32),
            Self::Uint64 => parse_number(text, *self).map(CellValue::Uint64),
            Self::Float32 => parse_number(text, *self).map(CellValue::Float32),
            Self::Float64 => parse_number(text, *self).map(CellValue::Float64),
            Self::Text => Ok(CellValue::Text(text.to_owned())),
        }
    }
}

impl Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CellValue {
    /// The kind this value was coerced as.
    pub const fn kind(&self) -> TargetKind {
        match self {
            Self::Bool(_) => TargetKind::Bool,
            Self::Int8(_) => TargetKind::Int8,
            Self::Int16(_) => TargetKind::Int16,
            Self::Int32(_) => TargetKind::Int32,
            Self::Int64(_) => TargetKind::Int64,
            Self::Uint8(_) => TargetKind::Uint8,
            Self::Uint16(_) => TargetKind::Uint16,
            Self::Uint32(_) => TargetKind::Uint32,
            Self::Uint64(_) => TargetKind::Uint64,
            Self::Float32(_) => TargetKind::Float32,
            Self::Float64(_) => TargetKind::Float64,
            Self::Text(_) => TargetKind::Text,
        }
    }
}

/// Parses the boolean token table: {"false", "f", "0"} and
/// {"true", "t", "1"}, case-insensitive. Anything else is a parse error.
fn parse_bool(text: &str) -> Result<bool, CoerceError> {
    match text.to_ascii_lowercase().as_str() {
        "false" | "f" | "0" => Ok(false),
        "true" | "t" | "1" => Ok(true),
        _ => Err(CoerceError::Parse {
            text: text.to_owned(),
            kind: TargetKind::Bool,
        }),
    }
}

/// Parses numeric text via the standard library, mapping any failure
/// (malformed digits, sign on an unsigned kind, overflow) to a parse error
/// carrying the offending text.
fn parse_number<T: std::str::FromStr>(text: &str, kind: TargetKind) -> Result<T, CoerceError> {
    text.parse().map_err(|_| CoerceError::Parse {
        text: text.to_owned(),
        kind,
    })
}

/// Typed destinations the row reader can write a coerced cell into.
///
/// Implementations exist for exactly the primitive types behind
/// [`TargetKind`]; empty cell text yields the type's zero value, matching
/// [`TargetKind::coerce`].
pub trait FromCellText: Sized {
    /// The kind this destination coerces through.
    const KIND: TargetKind;

    fn from_cell_text(text: &str) -> Result<Self, CoerceError>;
}

macro_rules! numeric_from_cell_text {
    ($($type:ty => $kind:ident),* $(,)?) => {$(
        impl FromCellText for $type {
            const KIND: TargetKind = TargetKind::$kind;

            fn from_cell_text(text: &str) -> Result<Self, CoerceError> {
                if text.is_empty() {
                    return Ok(Self::default());
                }
                parse_number(text, Self::KIND)
            }
        }
    )*};
}

numeric_from_cell_text! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
}

impl FromCellText for bool {
    const KIND: TargetKind = TargetKind::Bool;

    fn from_cell_text(text: &str) -> Result<Self, CoerceError> {
        if text.is_empty() {
            return Ok(false);
        }
        parse_bool(text)
    }
}

impl FromCellText for String {
    const KIND: TargetKind = TargetKind::Text;

    fn from_cell_text(text: &str) -> Result<Self, CoerceError> {
        Ok(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_zero_value() {
        for kind in [
            TargetKind::Bool,
            TargetKind::Int8,
            TargetKind::Int16,
            TargetKind::Int32,
            TargetKind::Int64,
            TargetKind::Uint8,
            TargetKind::Uint16,
            TargetKind::Uint32,
            TargetKind::Uint64,
            TargetKind::Float32,
            TargetKind::Float64,
            TargetKind::Text,
        ] {
            assert_eq!(kind.coerce("").unwrap(), kind.zero());
        }
        assert_eq!(TargetKind::Bool.zero(), CellValue::Bool(false));
        assert_eq!(TargetKind::Int32.zero(), CellValue::Int32(0));
        assert_eq!(TargetKind::Float64.zero(), CellValue::Float64(0.0));
        assert_eq!(TargetKind::Text.zero(), CellValue::Text(String::new()));
    }

    #[test]
    fn boolean_token_table() {
        assert_eq!(TargetKind::Bool.coerce("true").unwrap(), CellValue::Bool(true));
        assert_eq!(TargetKind::Bool.coerce("T").unwrap(), CellValue::Bool(true));
        assert_eq!(TargetKind::Bool.coerce("1").unwrap(), CellValue::Bool(true));
        assert_eq!(TargetKind::Bool.coerce("FALSE").unwrap(), CellValue::Bool(false));
        assert_eq!(TargetKind::Bool.coerce("f").unwrap(), CellValue::Bool(false));
        assert_eq!(TargetKind::Bool.coerce("0").unwrap(), CellValue::Bool(false));
        assert!(matches!(
            TargetKind::Bool.coerce("yes"),
            Err(CoerceError::Parse { .. })
        ));
    }

    #[test]
    fn integer_width_and_sign() {
        assert_eq!(TargetKind::Uint8.coerce("255").unwrap(), CellValue::Uint8(255));
        assert!(TargetKind::Uint8.coerce("256").is_err());
        assert!(TargetKind::Uint32.coerce("-5").is_err());
        assert_eq!(TargetKind::Int32.coerce("-5").unwrap(), CellValue::Int32(-5));
        assert_eq!(TargetKind::Int8.coerce("127").unwrap(), CellValue::Int8(127));
        assert!(TargetKind::Int8.coerce("128").is_err());
        assert!(TargetKind::Int64.coerce("1_000").is_err());
        assert!(TargetKind::Int64.coerce(" 1").is_err());
    }

    #[test]
    fn float_precision() {
        match TargetKind::Float32.coerce("3.14").unwrap() {
            CellValue::Float32(value) => assert!((value - 3.14).abs() < 1e-6),
            other => panic!("unexpected value {other:?}"),
        }
        assert_eq!(
            TargetKind::Float64.coerce("1e3").unwrap(),
            CellValue::Float64(1000.0)
        );
        assert!(TargetKind::Float64.coerce("abc").is_err());
    }

    #[test]
    fn text_passes_through() {
        assert_eq!(
            TargetKind::Text.coerce("  raw ").unwrap(),
            CellValue::Text("  raw ".to_owned())
        );
    }

    #[test]
    fn kind_names_round_trip() {
        assert_eq!(TargetKind::parse("uint16").unwrap(), TargetKind::Uint16);
        assert_eq!(TargetKind::parse("DOUBLE").unwrap(), TargetKind::Float64);
        assert_eq!(TargetKind::parse("varchar").unwrap(), TargetKind::Text);
        assert!(matches!(
            TargetKind::parse("struct"),
            Err(CoerceError::UnsupportedKind(name)) if name == "struct"
        ));
    }

    #[test]
    fn value_kind_matches_target() {
        assert_eq!(TargetKind::Uint64.coerce("7").unwrap().kind(), TargetKind::Uint64);
        assert_eq!(TargetKind::Text.coerce("x").unwrap().kind(), TargetKind::Text);
    }

    #[test]
    fn typed_destination_defaults() {
        assert_eq!(i32::from_cell_text("").unwrap(), 0);
        assert_eq!(bool::from_cell_text("").unwrap(), false);
        assert_eq!(String::from_cell_text("").unwrap(), "");
        assert_eq!(u8::from_cell_text("255").unwrap(), 255);
        assert!(u8::from_cell_text("256").is_err());
        assert_eq!(bool::from_cell_text("T").unwrap(), true);
    }
}
