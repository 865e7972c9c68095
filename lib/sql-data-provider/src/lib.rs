//! sea-orm backed record sources for list views.
//!
//! A [`record::RecordProvider`] wraps a `Select<E>` as the base scope of a
//! list view and translates the list query into `WHERE`/`ORDER BY`/`LIMIT`.

use std::sync::Arc;

use list_view_core::repository::error::DataLayerError;
use list_view_core::repository::record_repository::RecordRepository;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::mapper::to_data_layer_error;

mod common;
mod entity;
mod list_query_generic;
mod mapper;

pub mod record;
pub mod user;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utilities;

pub type DbConn = DatabaseConnection;

#[derive(Clone)]
pub struct DataLayer {
    db: DatabaseConnection,
    user_record_repository: Arc<dyn RecordRepository>,
}

impl DataLayer {
    pub fn build(db: DbConn) -> Self {
        Self {
            user_record_repository: Arc::new(user::user_record_provider(db.clone())),
            db,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Users joined with their team, `team.name` exposed as a field
    pub fn get_user_record_repository(&self) -> Arc<dyn RecordRepository> {
        self.user_record_repository.clone()
    }
}

/// Connects to `database_url` and brings the schema up to date
pub async fn db_conn(
    database_url: impl Into<String>,
) -> Result<DbConn, DataLayerError> {
    let database_url = database_url.into();

    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);
    if database_url.contains(":memory:") {
        // each pooled connection would get its own empty in-memory database
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options)
        .await
        .map_err(to_data_layer_error)?;

    Migrator::up(&db, None).await.map_err(to_data_layer_error)?;
    tracing::debug!("Database schema up to date");

    Ok(db)
}
