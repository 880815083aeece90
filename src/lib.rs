mod any_dialect;

pub use any_dialect::*;
pub use keel_core::*;
#[cfg(feature = "mysql")]
pub use keel_mysql::*;
#[cfg(feature = "postgres")]
pub use keel_postgres::*;
#[cfg(feature = "sqlite")]
pub use keel_sqlite::*;
