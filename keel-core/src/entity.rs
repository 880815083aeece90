use crate::TableDef;

/// Application type mapped to a table.
///
/// Implemented by the reflection layer (derive macros or hand written code). `table_def`
/// returns the generic description: field types are the discovered ones, not yet normalized by
/// any dialect. Use `Dialect::table` to obtain the normalized and cached version.
pub trait Entity: 'static {
    fn table_def() -> TableDef;
}
