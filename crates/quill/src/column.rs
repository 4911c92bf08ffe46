//! # Column values
//! The conversion between a field's Rust type and the SQLite value of its
//! storage class. Implemented only for the supported semantic types, so an
//! unsupported field type in a derived record is a compile error.

use crate::types::{Blob, SemanticType};
use rusqlite::types::{FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported column type",
    label = "unsupported column type",
    note = "record fields must be one of i32, u32, i64, u64, f32, f64, String or Vec<u8>"
)]
pub trait Column: Sized {
    const SEMANTIC: SemanticType;

    /// Borrow the value for binding.
    /// - Text and blobs are borrowed here and copied by the engine on bind, so
    ///   the statement never refers to the record's buffers.
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>>;

    /// Build an owned value from the column of the current row.
    fn from_sql(value: ValueRef<'_>) -> FromSqlResult<Self>;
}

macro_rules! integer_columns {
    ($($ty:ty => $semantic:ident),* $(,)?) => {
        $(
            impl Column for $ty {
                const SEMANTIC: SemanticType = SemanticType::$semantic;

                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                    let value = i64::try_from(*self)
                        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
                    Ok(ToSqlOutput::Borrowed(ValueRef::Integer(value)))
                }

                fn from_sql(value: ValueRef<'_>) -> FromSqlResult<Self> {
                    let wide = value.as_i64()?;
                    <$ty>::try_from(wide).map_err(|_| FromSqlError::OutOfRange(wide))
                }
            }
        )*
    };
}

integer_columns!(i32 => I32, u32 => U32, i64 => I64);

/// Stored as the `i64` with the same bits, so the full range round-trips.
/// - Values above `i64::MAX` are negative in SQL comparisons and ordering.
impl Column for u64 {
    const SEMANTIC: SemanticType = SemanticType::U64;

    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Borrowed(ValueRef::Integer(*self as i64)))
    }

    fn from_sql(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_i64().map(|wide| wide as u64)
    }
}

macro_rules! real_columns {
    ($($ty:ty => $semantic:ident),* $(,)?) => {
        $(
            impl Column for $ty {
                const SEMANTIC: SemanticType = SemanticType::$semantic;

                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                    Ok(ToSqlOutput::Borrowed(ValueRef::Real(f64::from(*self))))
                }

                fn from_sql(value: ValueRef<'_>) -> FromSqlResult<Self> {
                    match value {
                        ValueRef::Real(real) => Ok(real as $ty),
                        ValueRef::Integer(int) => Ok(int as $ty),
                        _ => Err(FromSqlError::InvalidType),
                    }
                }
            }
        )*
    };
}

real_columns!(f32 => F32, f64 => F64);

impl Column for String {
    const SEMANTIC: SemanticType = SemanticType::Text;

    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Borrowed(ValueRef::Text(self.as_bytes())))
    }

    fn from_sql(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl Column for Blob {
    const SEMANTIC: SemanticType = SemanticType::Blob;

    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Borrowed(ValueRef::Blob(self.as_slice())))
    }

    fn from_sql(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_blob().map(<[u8]>::to_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<C: Column>(value: &C) -> C {
        let Ok(ToSqlOutput::Borrowed(value_ref)) = value.to_sql() else {
            panic!("columns bind borrowed values")
        };
        C::from_sql(value_ref).expect("a bound value reads back")
    }

    #[test]
    fn integer_widths() {
        assert_eq!(round_trip(&i32::MIN), i32::MIN);
        assert_eq!(round_trip(&u32::MAX), u32::MAX);
        assert_eq!(round_trip(&i64::MIN), i64::MIN);
        assert_eq!(round_trip(&(i64::MAX as u64)), i64::MAX as u64);
    }

    #[test]
    fn u64_keeps_its_bits() {
        for value in [u64::MAX, 1 << 63, (1 << 63) + 1] {
            assert_eq!(round_trip(&value), value);
        }
        assert!(matches!(
            u64::MAX.to_sql(),
            Ok(ToSqlOutput::Borrowed(ValueRef::Integer(-1)))
        ));
        assert_eq!(u64::from_sql(ValueRef::Integer(-1)).ok(), Some(u64::MAX));
    }

    #[test]
    fn narrowing_is_checked() {
        assert!(matches!(
            i32::from_sql(ValueRef::Integer(i64::from(i32::MAX) + 1)),
            Err(FromSqlError::OutOfRange(_))
        ));
        assert!(matches!(
            u32::from_sql(ValueRef::Integer(-1)),
            Err(FromSqlError::OutOfRange(-1))
        ));
    }

    #[test]
    fn reals_accept_integer_storage() {
        assert_eq!(f64::from_sql(ValueRef::Integer(3)).ok(), Some(3.0));
        assert_eq!(f32::from_sql(ValueRef::Real(0.5)).ok(), Some(0.5));
        assert!(f64::from_sql(ValueRef::Text(b"1.0")).is_err());
    }

    #[test]
    fn text_and_blob_are_copied() {
        let text = String::from("hello");
        assert_eq!(round_trip(&text), "hello");
        assert_eq!(round_trip(&String::new()), "");
        let blob: Blob = vec![0, 1, 2, 255];
        assert_eq!(round_trip(&blob), blob);
        assert_eq!(round_trip(&Blob::new()), Blob::new());
    }

    #[test]
    fn mismatched_class_rejected() {
        assert!(matches!(
            String::from_sql(ValueRef::Null),
            Err(FromSqlError::InvalidType)
        ));
        assert!(matches!(
            Blob::from_sql(ValueRef::Text(b"abc")),
            Err(FromSqlError::InvalidType)
        ));
        assert!(matches!(
            i64::from_sql(ValueRef::Real(1.0)),
            Err(FromSqlError::InvalidType)
        ));
    }
}
