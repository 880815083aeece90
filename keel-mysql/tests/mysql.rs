#[cfg(test)]
mod tests {
    use keel_core::{DbHandle, Dialect, DialectName, Error, Feature, Result};
    use keel_mysql::{MYSQL_FEATURES, MySQLDialect};
    use keel_tests::{UserProfile, execute_tests, init_logs};

    struct Server(&'static str);
    impl DbHandle for Server {
        fn server_version(&self) -> Result<String> {
            Ok(self.0.into())
        }
    }

    struct Unreachable;
    impl DbHandle for Unreachable {
        fn server_version(&self) -> Result<String> {
            Err(Error::msg("Connection refused"))
        }
    }

    fn initialized(handle: &dyn DbHandle) -> MySQLDialect {
        let mut dialect = MySQLDialect::new();
        dialect.init(Some(handle));
        dialect
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn mysql() {
        init_logs();
        execute_tests(MySQLDialect::new()).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn mariadb() {
        init_logs();
        execute_tests(initialized(&Server("10.11.6-MariaDB-0+deb12u1"))).await;
    }

    #[test]
    fn probing() {
        init_logs();
        let dialect = MySQLDialect::new();
        assert_eq!(dialect.name(), DialectName::MySQL);
        assert_eq!(dialect.features(), MYSQL_FEATURES);
        assert!(!dialect.supports(Feature::CTE));
        assert!(dialect.server_version().is_none());

        let dialect = initialized(&Server("5.7.44-log"));
        assert_eq!(dialect.features(), MYSQL_FEATURES);
        assert!(dialect.server_version().is_some_and(|v| v.major == 5));

        let dialect = initialized(&Server("8.0.36"));
        assert!(dialect.supports(Feature::CTE));
        assert!(dialect.supports_named("with_values"));
        assert!(!dialect.supports(Feature::RETURNING));

        let dialect = initialized(&Server("10.6.16-MariaDB"));
        assert!(dialect.supports(Feature::CTE | Feature::INSERT_RETURNING));
        assert!(dialect.supports(Feature::DELETE_RETURNING));
        assert!(dialect.supports(MYSQL_FEATURES));

        let dialect = initialized(&Unreachable);
        assert_eq!(dialect.features(), MYSQL_FEATURES);
        assert!(dialect.server_version().is_none());

        let dialect = initialized(&Server("not a version"));
        assert_eq!(dialect.features(), MYSQL_FEATURES);

        let mut dialect = MySQLDialect::new();
        dialect.init(None);
        assert_eq!(dialect.features(), MYSQL_FEATURES);
    }

    #[test]
    fn normalized_tables() {
        let dialect = MySQLDialect::new();
        let table = dialect.table::<UserProfile>();
        let get = |name: &str| {
            table
                .get_field(name)
                .map(|v| v.sql_type.to_string())
                .expect("Field must exist")
        };
        assert_eq!(get("user_id"), "CHAR(36)");
        assert_eq!(get("username"), "VARCHAR(255)");
        assert_eq!(get("follower_count"), "BIGINT");
        assert_eq!(get("is_active"), "TINYINT(1)");
        assert_eq!(get("last_login"), "DATETIME");
        let mut out = String::new();
        dialect.write_identifier_quoted(&mut out, &table.name);
        assert_eq!(out, "`user_profiles`");
    }
}
