use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

/// Classification of a column type.
///
/// Reflection produces the generic variants, each dialect then rewrites them into something its
/// engine actually stores. `Named` carries engine specific or user declared type names verbatim.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SqlType {
    Boolean,
    TinyInt,
    SmallInt,
    #[default]
    Integer,
    BigInt,
    Real,
    DoublePrecision,
    Numeric,
    Char,
    VarChar,
    Text,
    Blob,
    Date,
    Time,
    Timestamp,
    TimestampWithTimezone,
    Uuid,
    Json,
    Named(Cow<'static, str>),
}

impl SqlType {
    /// Every generic variant, `Named` excluded.
    pub const GENERIC: &'static [SqlType] = &[
        SqlType::Boolean,
        SqlType::TinyInt,
        SqlType::SmallInt,
        SqlType::Integer,
        SqlType::BigInt,
        SqlType::Real,
        SqlType::DoublePrecision,
        SqlType::Numeric,
        SqlType::Char,
        SqlType::VarChar,
        SqlType::Text,
        SqlType::Blob,
        SqlType::Date,
        SqlType::Time,
        SqlType::Timestamp,
        SqlType::TimestampWithTimezone,
        SqlType::Uuid,
        SqlType::Json,
    ];

    pub const fn named(name: &'static str) -> Self {
        SqlType::Named(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        match self {
            SqlType::Boolean => "BOOLEAN",
            SqlType::TinyInt => "TINYINT",
            SqlType::SmallInt => "SMALLINT",
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Real => "REAL",
            SqlType::DoublePrecision => "DOUBLE PRECISION",
            SqlType::Numeric => "NUMERIC",
            SqlType::Char => "CHAR",
            SqlType::VarChar => "VARCHAR",
            SqlType::Text => "TEXT",
            SqlType::Blob => "BLOB",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::TimestampWithTimezone => "TIMESTAMP WITH TIME ZONE",
            SqlType::Uuid => "UUID",
            SqlType::Json => "JSON",
            SqlType::Named(name) => name.as_ref(),
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, SqlType::Named(..))
    }
}

impl Display for SqlType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for SqlType {
    fn from(value: &'static str) -> Self {
        SqlType::named(value)
    }
}
