use keel_core::{Dialect, DialectName, Feature, SqlType, Tables, TypeMap};

const RULES: &[(SqlType, SqlType)] = &[
    // No one byte integer in Postgres
    (SqlType::TinyInt, SqlType::SmallInt),
    (SqlType::Blob, SqlType::named("BYTEA")),
    (SqlType::Json, SqlType::named("JSONB")),
    (SqlType::TimestampWithTimezone, SqlType::named("TIMESTAMPTZ")),
];

pub const POSTGRES_TYPES: TypeMap = TypeMap::new(RULES);

pub const POSTGRES_FEATURES: Feature = Feature::CTE
    .union(Feature::WITH_VALUES)
    .union(Feature::RETURNING)
    .union(Feature::INSERT_RETURNING)
    .union(Feature::DELETE_RETURNING)
    .union(Feature::DEFAULT_PLACEHOLDER)
    .union(Feature::DOUBLE_COLON_CAST)
    .union(Feature::INSERT_TABLE_ALIAS)
    .union(Feature::UPDATE_TABLE_ALIAS)
    .union(Feature::DELETE_TABLE_ALIAS)
    .union(Feature::TABLE_CASCADE)
    .union(Feature::TABLE_IDENTITY)
    .union(Feature::TABLE_TRUNCATE)
    .union(Feature::TABLE_NOT_EXISTS)
    .union(Feature::INSERT_ON_CONFLICT)
    .union(Feature::SELECT_EXISTS)
    .union(Feature::GENERATED_IDENTITY)
    .union(Feature::COMPOSITE_IN);

/// Capabilities are known statically, `init` is the trait's no-op.
#[derive(Debug, Default)]
pub struct PostgresDialect {
    tables: Tables,
}

impl PostgresDialect {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Dialect for PostgresDialect {
    fn as_dyn(&self) -> &dyn Dialect {
        self
    }

    fn name(&self) -> DialectName {
        DialectName::Postgres
    }

    fn features(&self) -> Feature {
        POSTGRES_FEATURES
    }

    fn tables(&self) -> &Tables {
        &self.tables
    }

    fn type_map(&self) -> &TypeMap {
        &POSTGRES_TYPES
    }
}
