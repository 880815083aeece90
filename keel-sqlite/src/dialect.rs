use keel_core::{Dialect, DialectName, Feature, SqlType, Tables, TypeMap};

/// SQLite types have no size and `INTEGER PRIMARY KEY` is an alias for the ROWID, every
/// integer width collapses to `INTEGER`. Floating point is always 8 bytes `REAL`.
const RULES: &[(SqlType, SqlType)] = &[
    (SqlType::TinyInt, SqlType::Integer),
    (SqlType::SmallInt, SqlType::Integer),
    (SqlType::BigInt, SqlType::Integer),
    (SqlType::DoublePrecision, SqlType::Real),
    (SqlType::Uuid, SqlType::Text),
];

pub const SQLITE_TYPES: TypeMap = TypeMap::new(RULES);

pub const SQLITE_FEATURES: Feature = Feature::CTE
    .union(Feature::RETURNING)
    .union(Feature::INSERT_TABLE_ALIAS)
    .union(Feature::DELETE_TABLE_ALIAS);

/// Capabilities are known statically, `init` is the trait's no-op.
#[derive(Debug, Default)]
pub struct SQLiteDialect {
    tables: Tables,
}

impl SQLiteDialect {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Dialect for SQLiteDialect {
    fn as_dyn(&self) -> &dyn Dialect {
        self
    }

    fn name(&self) -> DialectName {
        DialectName::SQLite
    }

    fn features(&self) -> Feature {
        SQLITE_FEATURES
    }

    fn tables(&self) -> &Tables {
        &self.tables
    }

    fn type_map(&self) -> &TypeMap {
        &SQLITE_TYPES
    }
}
