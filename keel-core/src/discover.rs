use crate::SqlType;
use rust_decimal::Decimal;
use std::{
    borrow::Cow,
    rc::Rc,
    sync::{Arc, RwLock},
};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Generic (engine independent) column type of a Rust type.
///
/// Reflection uses this to guess the type of each field before the dialect normalizes it.
/// Unsigned integers are widened to the next signed type that can hold them, `u64` stays on
/// `BIGINT` like every other 64 bits integer.
pub trait DiscoverType {
    /// True if the column can hold `NULL`.
    const NULLABLE: bool = false;

    fn discovered_type() -> SqlType;
}

macro_rules! impl_discover_type {
    ($($source:ty),+ => $destination:expr) => {
        $(
            impl DiscoverType for $source {
                fn discovered_type() -> SqlType {
                    $destination
                }
            }
        )+
    };
}

impl_discover_type!(bool => SqlType::Boolean);
impl_discover_type!(i8 => SqlType::TinyInt);
impl_discover_type!(i16, u8 => SqlType::SmallInt);
impl_discover_type!(i32, u16 => SqlType::Integer);
impl_discover_type!(i64, u32, u64, isize, usize => SqlType::BigInt);
impl_discover_type!(i128, u128, Decimal => SqlType::Numeric);
impl_discover_type!(f32 => SqlType::Real);
impl_discover_type!(f64 => SqlType::DoublePrecision);
impl_discover_type!(char => SqlType::Char);
impl_discover_type!(str, String => SqlType::VarChar);
impl_discover_type!([u8], Vec<u8> => SqlType::Blob);
impl_discover_type!(Date => SqlType::Date);
impl_discover_type!(Time => SqlType::Time);
impl_discover_type!(PrimitiveDateTime => SqlType::Timestamp);
impl_discover_type!(OffsetDateTime => SqlType::TimestampWithTimezone);
impl_discover_type!(Uuid => SqlType::Uuid);
impl_discover_type!(serde_json::Value => SqlType::Json);

impl<const N: usize> DiscoverType for [u8; N] {
    fn discovered_type() -> SqlType {
        SqlType::Blob
    }
}

impl<T: DiscoverType> DiscoverType for Option<T> {
    const NULLABLE: bool = true;
    fn discovered_type() -> SqlType {
        T::discovered_type()
    }
}

macro_rules! impl_discover_type_wrapper {
    ($($wrapper:ident),+) => {
        $(
            impl<T: DiscoverType + ?Sized> DiscoverType for $wrapper<T> {
                const NULLABLE: bool = T::NULLABLE;
                fn discovered_type() -> SqlType {
                    T::discovered_type()
                }
            }
        )+
    };
}

impl_discover_type_wrapper!(Box, Rc, Arc, RwLock);

impl<T: DiscoverType + ToOwned + ?Sized> DiscoverType for Cow<'_, T> {
    const NULLABLE: bool = T::NULLABLE;
    fn discovered_type() -> SqlType {
        T::discovered_type()
    }
}
