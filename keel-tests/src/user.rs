use crate::assert_only_types_changed;
use keel_core::{Dialect, Entity, FieldDef, PrimaryKeyType, TableDef};
use std::sync::Arc;
use time::PrimitiveDateTime;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub follower_count: u32,
    pub is_active: bool,
    pub last_login: Option<PrimitiveDateTime>,
}

impl Entity for UserProfile {
    fn table_def() -> TableDef {
        TableDef::new("user_profiles")
            .schema("testing")
            .field(FieldDef::discover::<Uuid>("user_id").primary_key(PrimaryKeyType::PrimaryKey))
            .field(FieldDef::discover::<String>("username").unique(true))
            .field(FieldDef::discover::<String>("email").unique(true))
            .field(FieldDef::discover::<Option<String>>("full_name"))
            .field(FieldDef::discover::<u32>("follower_count"))
            .field(FieldDef::discover::<bool>("is_active"))
            .field(FieldDef::discover::<Option<PrimitiveDateTime>>("last_login"))
    }
}

pub fn users<D: Dialect>(dialect: &D) {
    assert_only_types_changed::<UserProfile, _>(dialect);

    let table = dialect.table::<UserProfile>();
    assert_eq!(table.full_name(), "testing.user_profiles");
    assert_eq!(
        table.fields.iter().map(|v| v.name.as_ref()).collect::<Vec<_>>(),
        [
            "user_id",
            "username",
            "email",
            "full_name",
            "follower_count",
            "is_active",
            "last_login",
        ]
    );
    assert_eq!(
        table.primary_key().map(|v| v.name.as_ref()).collect::<Vec<_>>(),
        ["user_id"]
    );

    // Running the hook again on a registered descriptor changes nothing
    let mut again = TableDef::clone(&table);
    dialect.on_table(&mut again);
    assert_eq!(&again, table.as_ref());

    // No introspection happens after the first time
    let registered = dialect.tables().len();
    for _ in 0..10 {
        assert!(Arc::ptr_eq(&table, &dialect.table::<UserProfile>()));
    }
    assert!(
        dialect
            .tables()
            .get::<UserProfile>()
            .is_some_and(|v| Arc::ptr_eq(&v, &table))
    );
    assert_eq!(dialect.tables().len(), registered);
}
