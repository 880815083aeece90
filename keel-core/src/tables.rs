use crate::{Entity, TableDef};
use dashmap::{DashMap, mapref::entry::Entry};
use std::{
    any::{TypeId, type_name},
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

/// Registry of the tables already introspected, keyed by application type.
///
/// Entries are added once and looked up many times. A descriptor is built and normalized
/// before it gets published, readers only ever see complete descriptors and every lookup for a
/// type returns the same `Arc`.
///
/// Outside of this crate the registry is read only, descriptors get in through
/// `Dialect::table` and therefore always went through `Dialect::on_table`.
///
/// ```compile_fail
/// use keel_core::{Entity, TableDef, Tables};
///
/// struct Raw;
/// impl Entity for Raw {
///     fn table_def() -> TableDef {
///         TableDef::new("raw")
///     }
/// }
///
/// Tables::new().get_or_insert_with::<Raw>(Raw::table_def);
/// ```
#[derive(Default)]
pub struct Tables {
    tables: DashMap<TypeId, Arc<TableDef>>,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<E: Entity>(&self) -> Option<Arc<TableDef>> {
        self.get_by_id(TypeId::of::<E>())
    }

    pub fn get_by_id(&self, id: TypeId) -> Option<Arc<TableDef>> {
        self.tables.get(&id).map(|v| v.value().clone())
    }

    pub fn contains<E: Entity>(&self) -> bool {
        self.tables.contains_key(&TypeId::of::<E>())
    }

    /// Return the descriptor for `E`, building it with `build` on the first access.
    ///
    /// `build` runs outside of any lock. Concurrent first accesses may each run it, only the
    /// first result to be published is kept and returned to everyone.
    pub(crate) fn get_or_insert_with<E: Entity>(
        &self,
        build: impl FnOnce() -> TableDef,
    ) -> Arc<TableDef> {
        let id = TypeId::of::<E>();
        if let Some(table) = self.get_by_id(id) {
            return table;
        }
        self.publish(id, type_name::<E>(), Arc::new(build()))
    }

    fn publish(&self, id: TypeId, entity: &str, table: Arc<TableDef>) -> Arc<TableDef> {
        match self.tables.entry(id) {
            Entry::Occupied(entry) => {
                log::debug!(
                    "Table `{}` for {} was already registered, discarding the new descriptor",
                    entry.get().full_name(),
                    entity
                );
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                log::debug!(
                    "Registering table `{}` for {} ({} fields)",
                    table.full_name(),
                    entity,
                    table.fields.len()
                );
                entry.insert(table).value().clone()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Debug for Tables {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.tables.iter().map(|v| v.value().full_name()))
            .finish()
    }
}
