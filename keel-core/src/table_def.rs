use crate::{DiscoverType, SqlType};
use std::borrow::Cow;

/// Indicates how (or if) a field participates in the primary key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryKeyType {
    /// Single-column primary key.
    PrimaryKey,
    /// Member of a composite primary key.
    PartOfPrimaryKey,
    /// Not part of the primary key.
    #[default]
    None,
}

/// Description of a single column, as discovered by reflection.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Column name.
    pub name: Cow<'static, str>,
    /// Type classification, generic until the dialect hook rewrites it.
    pub sql_type: SqlType,
    /// Nullability flag.
    pub nullable: bool,
    /// Primary key participation.
    pub primary_key: PrimaryKeyType,
    /// Unique constraint (single column only).
    pub unique: bool,
}

impl FieldDef {
    pub fn new(name: impl Into<Cow<'static, str>>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            ..Default::default()
        }
    }

    /// Field whose type and nullability are discovered from the Rust type `T`.
    pub fn discover<T: DiscoverType + ?Sized>(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            sql_type: T::discovered_type(),
            nullable: T::NULLABLE,
            ..Default::default()
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn primary_key(mut self, primary_key: PrimaryKeyType) -> Self {
        self.primary_key = primary_key;
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}

/// Description of a table: where it lives and its ordered fields.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    /// Table name.
    pub name: Cow<'static, str>,
    /// Schema name (may be empty).
    pub schema: Cow<'static, str>,
    pub fields: Vec<FieldDef>,
}

impl TableDef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn schema(mut self, schema: impl Into<Cow<'static, str>>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|v| v.name == name)
    }

    pub fn primary_key(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields
            .iter()
            .filter(|v| v.primary_key != PrimaryKeyType::None)
    }

    pub fn full_name(&self) -> String {
        let mut result = String::new();
        if !self.schema.is_empty() {
            result.push_str(&self.schema);
            result.push('.');
        }
        result.push_str(&self.name);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let table = TableDef::new("orders")
            .schema("shop")
            .field(FieldDef::discover::<i64>("id").primary_key(PrimaryKeyType::PrimaryKey))
            .field(FieldDef::discover::<Option<String>>("note"))
            .field(FieldDef::new("code", SqlType::Char).unique(true));
        assert_eq!(table.full_name(), "shop.orders");
        assert_eq!(table.fields.len(), 3);
        assert_eq!(table.primary_key().map(|v| v.name.as_ref()).collect::<Vec<_>>(), ["id"]);
        let note = table.get_field("note").expect("Field note must exist");
        assert_eq!(note.sql_type, SqlType::VarChar);
        assert!(note.nullable);
        assert!(table.get_field("code").is_some_and(|v| v.unique && !v.nullable));
        assert!(table.get_field("missing").is_none());
        assert_eq!(TableDef::new("plain").full_name(), "plain");
    }
}
