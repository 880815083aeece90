use keel_core::{
    Context, DbHandle, Dialect, DialectName, Error, Feature, Result, SqlType, TableDef, Tables,
    TypeMap,
};
#[cfg(feature = "mysql")]
use keel_mysql::MySQLDialect;
#[cfg(feature = "postgres")]
use keel_postgres::PostgresDialect;
#[cfg(feature = "sqlite")]
use keel_sqlite::SQLiteDialect;
use url::Url;

#[cfg(not(any(feature = "sqlite", feature = "postgres", feature = "mysql")))]
compile_error!("Enable at least one backend feature: sqlite, postgres or mysql");

/// One of the backends compiled in, chosen at startup from configuration.
#[derive(Debug)]
pub enum AnyDialect {
    #[cfg(feature = "sqlite")]
    SQLite(SQLiteDialect),
    #[cfg(feature = "postgres")]
    Postgres(PostgresDialect),
    #[cfg(feature = "mysql")]
    MySQL(MySQLDialect),
}

macro_rules! delegate {
    ($self:expr, $dialect:ident => $expr:expr) => {
        match $self {
            #[cfg(feature = "sqlite")]
            AnyDialect::SQLite($dialect) => $expr,
            #[cfg(feature = "postgres")]
            AnyDialect::Postgres($dialect) => $expr,
            #[cfg(feature = "mysql")]
            AnyDialect::MySQL($dialect) => $expr,
        }
    };
}

impl AnyDialect {
    pub fn new(name: DialectName) -> Result<Self> {
        Ok(match name {
            #[cfg(feature = "sqlite")]
            DialectName::SQLite => AnyDialect::SQLite(SQLiteDialect::new()),
            #[cfg(feature = "postgres")]
            DialectName::Postgres => AnyDialect::Postgres(PostgresDialect::new()),
            #[cfg(feature = "mysql")]
            DialectName::MySQL => AnyDialect::MySQL(MySQLDialect::new()),
            #[allow(unreachable_patterns)]
            _ => {
                let error = Error::msg(format!(
                    "Dialect `{name}` is not enabled, compile keel with the `{name}` feature"
                ));
                log::error!("{:#}", error);
                return Err(error);
            }
        })
    }

    /// Selects the dialect from the scheme of a connection url (`postgres://user@host/db`,
    /// `sqlite:///path/to/file.db`, `mysql://...`).
    pub fn from_url(url: &str) -> Result<Self> {
        let context = || format!("While selecting the dialect for `{}`", url);
        let parsed = Url::parse(url).with_context(context)?;
        let name = parsed
            .scheme()
            .parse::<DialectName>()
            .with_context(context)?;
        Self::new(name).with_context(context)
    }

    /// `from_url` followed by `init` with the live handle.
    pub fn connect(url: &str, handle: &dyn DbHandle) -> Result<Self> {
        let mut dialect = Self::from_url(url)?;
        dialect.init(Some(handle));
        Ok(dialect)
    }

    pub fn inner(&self) -> &dyn Dialect {
        delegate!(self, dialect => dialect.as_dyn())
    }
}

impl Dialect for AnyDialect {
    fn as_dyn(&self) -> &dyn Dialect {
        self
    }

    fn name(&self) -> DialectName {
        delegate!(self, dialect => dialect.name())
    }

    fn features(&self) -> Feature {
        delegate!(self, dialect => dialect.features())
    }

    fn tables(&self) -> &Tables {
        delegate!(self, dialect => dialect.tables())
    }

    fn type_map(&self) -> &TypeMap {
        delegate!(self, dialect => dialect.type_map())
    }

    fn ident_quote(&self) -> char {
        delegate!(self, dialect => dialect.ident_quote())
    }

    fn init(&mut self, handle: Option<&dyn DbHandle>) {
        delegate!(self, dialect => dialect.init(handle))
    }

    fn normalize_type(&self, value: &SqlType) -> SqlType {
        delegate!(self, dialect => dialect.normalize_type(value))
    }

    fn on_table(&self, table: &mut TableDef) {
        delegate!(self, dialect => dialect.on_table(table))
    }
}

#[cfg(feature = "sqlite")]
impl From<SQLiteDialect> for AnyDialect {
    fn from(value: SQLiteDialect) -> Self {
        AnyDialect::SQLite(value)
    }
}

#[cfg(feature = "postgres")]
impl From<PostgresDialect> for AnyDialect {
    fn from(value: PostgresDialect) -> Self {
        AnyDialect::Postgres(value)
    }
}

#[cfg(feature = "mysql")]
impl From<MySQLDialect> for AnyDialect {
    fn from(value: MySQLDialect) -> Self {
        AnyDialect::MySQL(value)
    }
}
