/// Binds a record type to the worksheet its rows live in.
///
/// The provided method derives the name from the type's bare name, so a
/// `Department` record reads from a "Department" worksheet by default.
/// Record types stored under a different tab override [`sheet_name`] to
/// self-report it; callers never need to know which types do.
///
/// Wrapper shapes are transparent: a reference to a record, a vector or
/// slice of records, and a sequence of references all resolve to the name
/// of the underlying record type. The primitive kinds resolve to the empty
/// string, which means no worksheet applies rather than an error.
///
/// [`sheet_name`]: SheetRecord::sheet_name
pub trait SheetRecord {
    /// Worksheet name associated with this record type.
    fn sheet_name() -> String {
        let name = std::any::type_name::<Self>();
        name.rsplit("::").next().unwrap_or(name).to_owned()
    }
}

/// Resolves the worksheet name for a record type.
pub fn sheet_name_of<T: SheetRecord + ?Sized>() -> String {
    T::sheet_name()
}

impl<T: SheetRecord + ?Sized> SheetRecord for &T {
    fn sheet_name() -> String {
        T::sheet_name()
    }
}

impl<T: SheetRecord + ?Sized> SheetRecord for Box<T> {
    fn sheet_name() -> String {
        T::sheet_name()
    }
}

impl<T: SheetRecord> SheetRecord for Vec<T> {
    fn sheet_name() -> String {
        T::sheet_name()
    }
}

impl<T: SheetRecord> SheetRecord for [T] {
    fn sheet_name() -> String {
        T::sheet_name()
    }
}

macro_rules! no_sheet_name {
    ($($type:ty),* $(,)?) => {$(
        impl SheetRecord for $type {
            fn sheet_name() -> String {
                String::new()
            }
        }
    )*};
}

no_sheet_name!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, str);

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl SheetRecord for Plain {}

    struct Renamed;

    impl SheetRecord for Renamed {
        fn sheet_name() -> String {
            "archive".to_owned()
        }
    }

    #[test]
    fn bare_name_fallback() {
        assert_eq!(sheet_name_of::<Plain>(), "Plain");
    }

    #[test]
    fn self_reported_name() {
        assert_eq!(sheet_name_of::<Renamed>(), "archive");
    }

    #[test]
    fn wrappers_are_transparent() {
        assert_eq!(sheet_name_of::<&Plain>(), "Plain");
        assert_eq!(sheet_name_of::<Vec<Plain>>(), "Plain");
        assert_eq!(sheet_name_of::<[Plain]>(), "Plain");
        assert_eq!(sheet_name_of::<Vec<&Renamed>>(), "archive");
        assert_eq!(sheet_name_of::<&Vec<Renamed>>(), "archive");
        assert_eq!(sheet_name_of::<Box<Plain>>(), "Plain");
    }

    #[test]
    fn primitives_have_no_sheet() {
        assert_eq!(sheet_name_of::<i32>(), "");
        assert_eq!(sheet_name_of::<f64>(), "");
        assert_eq!(sheet_name_of::<String>(), "");
        assert_eq!(sheet_name_of::<&str>(), "");
        assert_eq!(sheet_name_of::<Vec<bool>>(), "");
    }
}
