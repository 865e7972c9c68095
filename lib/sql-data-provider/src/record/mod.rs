use std::collections::HashMap;
use std::marker::PhantomData;
use std::str::FromStr;

use sea_orm::{DatabaseConnection, EntityTrait, Select};

pub use crate::list_query_generic::FieldColumn;
use crate::list_query_generic::FieldResolver;

pub mod repository;


/// Record source over `base`, rows read as `M` and serialized into records.
///
/// Fields resolve to the extra expressions registered with
/// [`RecordProvider::with_field`] first, then to the columns of `E`.
pub struct RecordProvider<E: EntityTrait, M = <E as EntityTrait>::Model> {
    db: DatabaseConnection,
    base: Select<E>,
    fields: HashMap<String, FieldColumn>,
    model: PhantomData<fn() -> M>,
}

impl<E: EntityTrait, M> RecordProvider<E, M> {
    pub fn new(db: DatabaseConnection, base: Select<E>) -> Self {
        Self {
            db,
            base,
            fields: HashMap::new(),
            model: PhantomData,
        }
    }

    /// Makes a joined or computed expression filterable and sortable as `field`
    pub fn with_field(mut self, field: impl Into<String>, column: FieldColumn) -> Self {
        self.fields.insert(field.into(), column);
        self
    }
}

impl<E: EntityTrait, M> FieldResolver for RecordProvider<E, M> {
    fn resolve_field(&self, field: &str) -> Option<FieldColumn> {
        self.fields
            .get(field)
            .cloned()
            .or_else(|| E::Column::from_str(field).ok().map(FieldColumn::new))
    }
}
