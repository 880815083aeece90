use std::fmt::{self, Display, Formatter};

bitflags::bitflags! {
    /// Set of SQL capabilities supported by a backend.
    ///
    /// Built once when the dialect is created and only read afterwards. Combining two sets with
    /// `|` produces a new set.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Feature: u64 {
        /// `WITH` common table expressions.
        const CTE = 1 << 0;
        /// `WITH name (columns) AS (VALUES ...)`.
        const WITH_VALUES = 1 << 1;
        /// `RETURNING` on any statement.
        const RETURNING = 1 << 2;
        const INSERT_RETURNING = 1 << 3;
        const DELETE_RETURNING = 1 << 4;
        /// `DEFAULT` accepted as a value placeholder in `INSERT`.
        const DEFAULT_PLACEHOLDER = 1 << 5;
        /// `value::type` casts.
        const DOUBLE_COLON_CAST = 1 << 6;
        /// `VALUES ROW(...)` row constructors.
        const VALUES_ROW = 1 << 7;
        const UPDATE_MULTI_TABLE = 1 << 8;
        /// `INSERT INTO table AS alias`.
        const INSERT_TABLE_ALIAS = 1 << 9;
        const UPDATE_TABLE_ALIAS = 1 << 10;
        /// `DELETE FROM table AS alias`.
        const DELETE_TABLE_ALIAS = 1 << 11;
        const AUTO_INCREMENT = 1 << 12;
        const IDENTITY = 1 << 13;
        /// `DROP TABLE ... CASCADE`.
        const TABLE_CASCADE = 1 << 14;
        /// `TRUNCATE ... RESTART IDENTITY`.
        const TABLE_IDENTITY = 1 << 15;
        const TABLE_TRUNCATE = 1 << 16;
        /// `CREATE TABLE IF NOT EXISTS`.
        const TABLE_NOT_EXISTS = 1 << 17;
        /// `INSERT ... ON CONFLICT`.
        const INSERT_ON_CONFLICT = 1 << 18;
        /// `INSERT ... ON DUPLICATE KEY UPDATE`.
        const INSERT_ON_DUPLICATE_KEY = 1 << 19;
        const INSERT_IGNORE = 1 << 20;
        /// `SELECT EXISTS(...)`.
        const SELECT_EXISTS = 1 << 21;
        /// `GENERATED BY DEFAULT AS IDENTITY`.
        const GENERATED_IDENTITY = 1 << 22;
        /// `(a, b) IN ((1, 2), (3, 4))`.
        const COMPOSITE_IN = 1 << 23;
    }
}

impl Feature {
    /// True if every capability in `other` is in this set. The empty set is never supported.
    pub const fn has(self, other: Feature) -> bool {
        !other.is_empty() && self.contains(other)
    }

    /// Name-keyed version of `has`, unknown names are unsupported.
    pub fn supports_name(self, name: &str) -> bool {
        Self::by_name(name).is_some_and(|v| self.has(v))
    }

    /// Looks up a single capability by its name, case insensitive (`"cte"`, `"INSERT_RETURNING"`).
    pub fn by_name(name: &str) -> Option<Feature> {
        Self::all()
            .iter_names()
            .find(|(label, _)| label.eq_ignore_ascii_case(name))
            .map(|(_, feature)| feature)
    }

    /// Canonical (lowercase) names of the capabilities in this set, in bit order.
    pub fn names(self) -> impl Iterator<Item = String> {
        self.iter_names().map(|(label, _)| label.to_ascii_lowercase())
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(&name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Feature;

    const SET: Feature = Feature::CTE
        .union(Feature::RETURNING)
        .union(Feature::INSERT_TABLE_ALIAS)
        .union(Feature::DELETE_TABLE_ALIAS);

    #[test]
    fn membership() {
        assert!(SET.has(Feature::CTE));
        assert!(SET.has(Feature::RETURNING));
        assert!(SET.has(Feature::INSERT_TABLE_ALIAS));
        assert!(SET.has(Feature::DELETE_TABLE_ALIAS));
        assert!(SET.has(Feature::CTE | Feature::RETURNING));
        assert!(!SET.has(Feature::CTE | Feature::TABLE_CASCADE));
        assert!(!SET.has(Feature::empty()));
        let others = Feature::all().iter().filter(|v| !SET.has(*v)).count();
        assert_eq!(others, Feature::all().iter().count() - 4);
    }

    #[test]
    fn names() {
        assert!(SET.supports_name("cte"));
        assert!(SET.supports_name("RETURNING"));
        assert!(SET.supports_name("delete_table_alias"));
        assert!(!SET.supports_name("update_table_alias"));
        assert!(!SET.supports_name("time_travel"));
        assert!(!SET.supports_name(""));
        assert_eq!(
            SET.names().collect::<Vec<_>>(),
            ["cte", "returning", "insert_table_alias", "delete_table_alias"]
        );
        assert_eq!(
            SET.to_string(),
            "cte|returning|insert_table_alias|delete_table_alias"
        );
        assert_eq!(Feature::empty().to_string(), "");
    }

    #[test]
    fn from_iter() {
        let set: Feature = SET.names().filter_map(|v| Feature::by_name(&v)).collect();
        assert_eq!(set, SET);
        assert_eq!(Feature::all().iter().count(), 24);
        for feature in Feature::all().iter() {
            assert_eq!(feature.bits().count_ones(), 1);
        }
    }
}
