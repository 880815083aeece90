mod everything;
mod features;
mod trade;
mod user;

pub use everything::Everything;
pub use trade::TradeExecution;
pub use user::UserProfile;

use crate::{everything::everything, features::features, trade::trade_concurrent, user::users};
use keel_core::{Dialect, Entity};
use log::LevelFilter;
use std::{env, sync::Arc};

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

pub async fn execute_tests<D: Dialect + 'static>(dialect: D) {
    let dialect = Arc::new(dialect);
    features(dialect.as_ref());
    users(dialect.as_ref());
    everything(dialect.as_ref());
    trade_concurrent(dialect.clone()).await;
}

/// Asserts that the registered descriptor of `E` differs from the reflected one only in the
/// field types, and that those are exactly the normalized ones.
pub fn assert_only_types_changed<E: Entity, D: Dialect>(dialect: &D) {
    let reflected = E::table_def();
    let table = dialect.table::<E>();
    assert_eq!(table.name, reflected.name);
    assert_eq!(table.schema, reflected.schema);
    assert_eq!(table.fields.len(), reflected.fields.len());
    for (normalized, original) in table.fields.iter().zip(reflected.fields.iter()) {
        assert_eq!(normalized.name, original.name);
        assert_eq!(normalized.nullable, original.nullable);
        assert_eq!(normalized.primary_key, original.primary_key);
        assert_eq!(normalized.unique, original.unique);
        assert_eq!(
            normalized.sql_type,
            dialect.normalize_type(&original.sql_type),
            "{}: field `{}` was not normalized",
            dialect.name(),
            original.name
        );
    }
}
