use crate::{Entity, Error, Feature, Result, SqlType, TableDef, Tables, TypeMap};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
    sync::Arc,
};

/// Identity of a backend, used by generic code that must special case behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialectName {
    SQLite,
    Postgres,
    MySQL,
}

impl DialectName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DialectName::SQLite => "sqlite",
            DialectName::Postgres => "postgres",
            DialectName::MySQL => "mysql",
        }
    }
}

impl Display for DialectName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectName {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => DialectName::SQLite,
            "postgres" | "postgresql" | "pg" => DialectName::Postgres,
            "mysql" | "mariadb" => DialectName::MySQL,
            _ => {
                return Err(Error::msg(format!(
                    "Unknown dialect `{s}`, expected one of: sqlite, postgres, mysql"
                )));
            }
        })
    }
}

/// Live database handle passed to `Dialect::init`, for backends whose capabilities depend on the
/// server they are connected to.
pub trait DbHandle {
    /// Server version string, as returned by `SELECT version()`.
    fn server_version(&self) -> Result<String>;
}

/// Backend specific knowledge consulted by the query builder: capabilities, identifier quoting
/// and column type normalization.
///
/// Everything except the table registry is fixed once the dialect is shared (`init` takes
/// `&mut self`), so implementations are read without synchronization.
pub trait Dialect: Send + Sync {
    fn as_dyn(&self) -> &dyn Dialect;

    fn name(&self) -> DialectName;

    fn features(&self) -> Feature;

    fn tables(&self) -> &Tables;

    fn type_map(&self) -> &TypeMap;

    fn ident_quote(&self) -> char {
        '"'
    }

    /// Connect time initialization, backends with static capabilities ignore the handle.
    fn init(&mut self, _handle: Option<&dyn DbHandle>) {}

    fn supports(&self, feature: Feature) -> bool {
        self.features().has(feature)
    }

    fn supports_named(&self, name: &str) -> bool {
        self.features().supports_name(name)
    }

    fn normalize_type(&self, value: &SqlType) -> SqlType {
        self.type_map().normalize(value)
    }

    /// Runs once per table after reflection, before the table is cached. Only the field types
    /// are rewritten.
    fn on_table(&self, table: &mut TableDef) {
        for field in &mut table.fields {
            let normalized = self.normalize_type(&field.sql_type);
            if normalized != field.sql_type {
                log::trace!(
                    "{}: {}.{} {} => {}",
                    self.name(),
                    table.name,
                    field.name,
                    field.sql_type,
                    normalized
                );
                field.sql_type = normalized;
            }
        }
    }

    fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        let quote = self.ident_quote();
        let doubled = String::from_iter([quote, quote]);
        out.push(quote);
        self.write_escaped(out, value, quote, &doubled);
        out.push(quote);
    }

    /// Normalized descriptor of `E`, reflected and run through `on_table` on first access.
    fn table<E: Entity>(&self) -> Arc<TableDef>
    where
        Self: Sized,
    {
        self.tables().get_or_insert_with::<E>(|| {
            let mut table = E::table_def();
            self.on_table(&mut table);
            table
        })
    }
}
