use list_server::ServerConfig;
use list_server::router::start_server;
use list_view_core::config::core_config::{AppConfig, CoreConfig, ListViewConfig};
use serde_json::Value;
use sql_data_provider::DbConn;
use tokio::task::JoinHandle;

use super::client;

pub struct TestContext {
    pub db: DbConn,
    base_url: String,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_list_view_config(ListViewConfig::default()).await
    }

    pub async fn new_with_list_view_config(list_view: ListViewConfig) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let database_url = "sqlite::memory:";
        let db = sql_data_provider::db_conn(database_url).await.unwrap();
        let config = AppConfig {
            core: CoreConfig { list_view },
            app: ServerConfig {
                database_url: database_url.to_string(),
                ..Default::default()
            },
        };

        let _handle = tokio::spawn({
            let db = db.clone();
            async move { start_server(listener, config, db).await }
        });

        Self {
            db,
            base_url,
            _handle,
        }
    }

    pub async fn get(&self, path_and_query: &str) -> reqwest::Response {
        client()
            .get(format!("{}{path_and_query}", self.base_url))
            .send()
            .await
            .unwrap()
    }

    pub async fn get_json(&self, path_and_query: &str) -> (u16, Value) {
        let resp = self.get(path_and_query).await;
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }
}
