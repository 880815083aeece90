use crate::SqlType;

/// Normalization rules of a backend: a lookup table from the generic type found by reflection
/// to the type the engine really stores.
///
/// Types without an entry pass through unchanged, so `normalize` is total.
#[derive(Debug, Clone, Copy)]
pub struct TypeMap {
    rules: &'static [(SqlType, SqlType)],
}

impl TypeMap {
    pub const fn new(rules: &'static [(SqlType, SqlType)]) -> Self {
        Self { rules }
    }

    /// Rules mapping nothing, every type passes through.
    pub const fn identity() -> Self {
        Self { rules: &[] }
    }

    pub fn rules(&self) -> &'static [(SqlType, SqlType)] {
        self.rules
    }

    pub fn get(&self, value: &SqlType) -> Option<&'static SqlType> {
        self.rules
            .iter()
            .find_map(|(from, to)| if from == value { Some(to) } else { None })
    }

    pub fn normalize(&self, value: &SqlType) -> SqlType {
        self.get(value).unwrap_or(value).clone()
    }

    /// A map can be applied any number of times only if no target is also a source.
    pub fn is_idempotent(&self) -> bool {
        self.rules
            .iter()
            .all(|(_, to)| self.rules.iter().all(|(from, _)| from != to))
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::TypeMap;
    use crate::SqlType;

    const RULES: &[(SqlType, SqlType)] = &[
        (SqlType::SmallInt, SqlType::Integer),
        (SqlType::BigInt, SqlType::Integer),
        (SqlType::Blob, SqlType::named("BYTEA")),
    ];
    const MAP: TypeMap = TypeMap::new(RULES);

    #[test]
    fn normalize() {
        assert_eq!(MAP.normalize(&SqlType::SmallInt), SqlType::Integer);
        assert_eq!(MAP.normalize(&SqlType::BigInt), SqlType::Integer);
        assert_eq!(MAP.normalize(&SqlType::Integer), SqlType::Integer);
        assert_eq!(MAP.normalize(&SqlType::Blob), SqlType::named("BYTEA"));
        assert_eq!(
            MAP.normalize(&SqlType::named("blob-like")),
            SqlType::named("blob-like")
        );
        assert_eq!(MAP.get(&SqlType::Text), None);
        assert!(MAP.is_idempotent());
        for value in SqlType::GENERIC {
            let once = MAP.normalize(value);
            assert_eq!(MAP.normalize(&once), once);
        }
    }

    #[test]
    fn chained_rules_are_not_idempotent() {
        const CHAINED: &[(SqlType, SqlType)] = &[
            (SqlType::TinyInt, SqlType::SmallInt),
            (SqlType::SmallInt, SqlType::Integer),
        ];
        let map = TypeMap::new(CHAINED);
        assert!(!map.is_idempotent());
        assert!(TypeMap::identity().is_idempotent());
        assert_eq!(
            TypeMap::default().normalize(&SqlType::Json),
            SqlType::Json
        );
    }
}
