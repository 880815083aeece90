use keel_core::{
    Context, DbHandle, Dialect, DialectName, Error, Feature, Result, SqlType, Tables, TypeMap,
};
use std::fmt::{self, Display, Formatter};

const RULES: &[(SqlType, SqlType)] = &[
    // VARCHAR requires a length
    (SqlType::VarChar, SqlType::named("VARCHAR(255)")),
    (SqlType::Boolean, SqlType::named("TINYINT(1)")),
    (SqlType::Timestamp, SqlType::named("DATETIME")),
    (SqlType::TimestampWithTimezone, SqlType::named("DATETIME")),
    (SqlType::Uuid, SqlType::named("CHAR(36)")),
];

pub const MYSQL_TYPES: TypeMap = TypeMap::new(RULES);

/// Capabilities of every supported server, before probing the version.
pub const MYSQL_FEATURES: Feature = Feature::AUTO_INCREMENT
    .union(Feature::DEFAULT_PLACEHOLDER)
    .union(Feature::UPDATE_MULTI_TABLE)
    .union(Feature::VALUES_ROW)
    .union(Feature::TABLE_TRUNCATE)
    .union(Feature::TABLE_NOT_EXISTS)
    .union(Feature::INSERT_IGNORE)
    .union(Feature::INSERT_ON_DUPLICATE_KEY)
    .union(Feature::DELETE_TABLE_ALIAS);

/// Server flavor and version, parsed from the `SELECT version()` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerVersion {
    pub mariadb: bool,
    pub major: u32,
    pub minor: u32,
}

impl ServerVersion {
    /// Accepts strings like `8.0.36`, `5.7.44-log`, `10.6.16-MariaDB-1:10.6.16+maria~ubu2004` and
    /// the replication prefixed `5.5.5-10.11.6-MariaDB`.
    pub fn parse(value: &str) -> Result<Self> {
        let mariadb = value.to_ascii_lowercase().contains("mariadb");
        let mut version = value.trim();
        if mariadb {
            version = version.strip_prefix("5.5.5-").unwrap_or(version);
        }
        let mut parts = version
            .split(|c: char| !c.is_ascii_digit())
            .map(str::parse::<u32>);
        let (Some(Ok(major)), Some(Ok(minor))) = (parts.next(), parts.next()) else {
            return Err(Error::msg(format!(
                "Cannot extract the server version from `{value}`"
            )));
        };
        Ok(Self {
            mariadb,
            major,
            minor,
        })
    }

    /// Capabilities this server adds on top of `MYSQL_FEATURES`.
    pub fn features(&self) -> Feature {
        let at_least = |major, minor| (self.major, self.minor) >= (major, minor);
        let mut result = Feature::empty();
        if self.mariadb {
            if at_least(10, 2) {
                result = result | Feature::CTE | Feature::WITH_VALUES;
            }
            if at_least(10, 5) {
                result = result
                    | Feature::RETURNING
                    | Feature::INSERT_RETURNING
                    | Feature::DELETE_RETURNING;
            }
        } else if at_least(8, 0) {
            result = result | Feature::CTE | Feature::WITH_VALUES;
        }
        result
    }
}

impl Display for ServerVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}.{}",
            if self.mariadb { "MariaDB" } else { "MySQL" },
            self.major,
            self.minor
        )
    }
}

#[derive(Debug)]
pub struct MySQLDialect {
    tables: Tables,
    features: Feature,
    version: Option<ServerVersion>,
}

impl MySQLDialect {
    pub fn new() -> Self {
        Self {
            tables: Tables::new(),
            features: MYSQL_FEATURES,
            version: None,
        }
    }

    /// Version detected by `init`, if any.
    pub fn server_version(&self) -> Option<ServerVersion> {
        self.version
    }
}

impl Default for MySQLDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for MySQLDialect {
    fn as_dyn(&self) -> &dyn Dialect {
        self
    }

    fn name(&self) -> DialectName {
        DialectName::MySQL
    }

    fn features(&self) -> Feature {
        self.features
    }

    fn tables(&self) -> &Tables {
        &self.tables
    }

    fn type_map(&self) -> &TypeMap {
        &MYSQL_TYPES
    }

    fn ident_quote(&self) -> char {
        '`'
    }

    /// Probes the server version, CTE and RETURNING support depend on it. On failure the
    /// dialect keeps the capabilities shared by every server.
    fn init(&mut self, handle: Option<&dyn DbHandle>) {
        let Some(handle) = handle else {
            return;
        };
        let version = match handle
            .server_version()
            .and_then(|v| ServerVersion::parse(&v))
            .context("While probing the MySQL server version")
        {
            Ok(v) => v,
            Err(e) => {
                log::warn!("{:#}", e);
                return;
            }
        };
        let extra = version.features();
        if !extra.is_empty() {
            log::info!("{} supports {}", version, extra);
        }
        self.features = MYSQL_FEATURES | extra;
        self.version = Some(version);
    }
}
