use crate::assert_only_types_changed;
use keel_core::{Dialect, Entity, FieldDef, PrimaryKeyType, SqlType, TableDef};
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// One field for each type reflection knows about.
pub struct Everything;

impl Entity for Everything {
    fn table_def() -> TableDef {
        TableDef::new("everything")
            .field(FieldDef::discover::<i64>("id").primary_key(PrimaryKeyType::PrimaryKey))
            .field(FieldDef::discover::<bool>("boolean"))
            .field(FieldDef::discover::<i8>("int8"))
            .field(FieldDef::discover::<i16>("int16"))
            .field(FieldDef::discover::<i32>("int32"))
            .field(FieldDef::discover::<u64>("uint64"))
            .field(FieldDef::discover::<i128>("int128"))
            .field(FieldDef::discover::<f32>("float32"))
            .field(FieldDef::discover::<f64>("float64"))
            .field(FieldDef::discover::<Decimal>("decimal"))
            .field(FieldDef::discover::<char>("char"))
            .field(FieldDef::discover::<String>("varchar"))
            .field(FieldDef::discover::<Option<Box<[u8]>>>("blob"))
            .field(FieldDef::discover::<Date>("date"))
            .field(FieldDef::discover::<Time>("time"))
            .field(FieldDef::discover::<PrimitiveDateTime>("timestamp"))
            .field(FieldDef::discover::<OffsetDateTime>("timestamptz"))
            .field(FieldDef::discover::<Uuid>("uuid"))
            .field(FieldDef::discover::<Option<serde_json::Value>>("json"))
            .field(FieldDef::new("text", SqlType::Text))
            .field(FieldDef::new("custom", SqlType::named("blob-like")))
    }
}

pub fn everything<D: Dialect>(dialect: &D) {
    assert!(
        dialect.type_map().is_idempotent(),
        "{}: normalization rules must not chain",
        dialect.name()
    );
    for value in SqlType::GENERIC {
        let once = dialect.normalize_type(value);
        assert_eq!(dialect.normalize_type(&once), once);
    }
    assert_eq!(
        dialect.normalize_type(&SqlType::named("blob-like")),
        SqlType::named("blob-like")
    );

    assert_only_types_changed::<Everything, _>(dialect);
    let table = dialect.table::<Everything>();
    for field in &table.fields {
        assert_eq!(
            dialect.normalize_type(&field.sql_type),
            field.sql_type,
            "{}: field `{}` is not canonical after the hook",
            dialect.name(),
            field.name
        );
    }
    let custom = table.get_field("custom").expect("Field custom must exist");
    assert_eq!(custom.sql_type, SqlType::named("blob-like"));
    assert!(table.get_field("blob").is_some_and(|v| v.nullable));
}
