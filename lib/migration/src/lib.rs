pub use sea_orm_migration::migrator::MigratorTrait;
use sea_orm_migration::prelude::*;

pub(crate) mod datatype;

mod m20250312_000001_initial;
mod m20250318_000002_user_list_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250312_000001_initial::Migration),
            Box::new(m20250318_000002_user_list_indexes::Migration),
        ]
    }
}
