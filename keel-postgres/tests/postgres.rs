#[cfg(test)]
mod tests {
    use keel_core::{Dialect, DialectName, Feature, SqlType};
    use keel_postgres::PostgresDialect;
    use keel_tests::{Everything, TradeExecution, execute_tests, init_logs};

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn postgres() {
        init_logs();
        execute_tests(PostgresDialect::new()).await;
    }

    #[test]
    fn features() {
        let mut dialect = PostgresDialect::new();
        dialect.init(None);
        assert_eq!(dialect.name(), DialectName::Postgres);
        assert!(dialect.supports(Feature::CTE | Feature::RETURNING));
        assert!(dialect.supports_named("generated_identity"));
        assert!(!dialect.supports(Feature::VALUES_ROW));
        assert_eq!(dialect.ident_quote(), '"');
    }

    #[test]
    fn normalized_tables() {
        init_logs();
        let dialect = PostgresDialect::new();
        let table = dialect.table::<Everything>();
        let get = |name: &str| {
            table
                .get_field(name)
                .map(|v| v.sql_type.clone())
                .expect("Field must exist")
        };
        assert_eq!(get("int8"), SqlType::SmallInt);
        assert_eq!(get("int16"), SqlType::SmallInt);
        assert_eq!(get("uint64"), SqlType::BigInt);
        assert_eq!(get("float64"), SqlType::DoublePrecision);
        assert_eq!(get("blob").to_string(), "BYTEA");
        assert_eq!(get("json").to_string(), "JSONB");
        assert_eq!(get("timestamp"), SqlType::Timestamp);
        assert_eq!(get("timestamptz").to_string(), "TIMESTAMPTZ");
        assert_ne!(get("timestamp"), get("timestamptz"));
        assert_eq!(get("uuid"), SqlType::Uuid);

        let trade = dialect.table::<TradeExecution>();
        assert_eq!(
            trade.get_field("metadata").map(|v| v.sql_type.to_string()),
            Some("BYTEA".into())
        );
    }
}
