#![allow(dead_code)]

use marketboard::configuration::{get_configuration, DatabaseSettings, Settings};
use marketboard::store::{MemoryStore, PgStore, ResourceStore};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub store: Arc<dyn ResourceStore>,
}

fn test_settings() -> Settings {
    settings_with_timeout(5)
}

fn settings_with_timeout(request_timeout_secs: u64) -> Settings {
    serde_json::from_value(serde_json::json!({
        "app_host": "127.0.0.1",
        "app_port": 0,
        "request_timeout_secs": request_timeout_secs,
        "database": {
            "username": "postgres",
            "password": "postgres",
            "host": "localhost",
            "port": 5432,
            "database_name": "unused"
        }
    }))
    .expect("Failed to build test settings")
}

async fn spawn_with_store(store: Arc<dyn ResourceStore>, settings: Settings) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = marketboard::startup::run(listener, store.clone(), settings)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp { address, store }
}

/// Server backed by the in-process store.
pub async fn spawn_app() -> TestApp {
    let store: Arc<dyn ResourceStore> = Arc::new(MemoryStore::new());
    spawn_with_store(store, test_settings()).await
}

/// Server over the given store, giving up on requests after `request_timeout_secs`.
pub async fn spawn_app_with(store: Arc<dyn ResourceStore>, request_timeout_secs: u64) -> TestApp {
    spawn_with_store(store, settings_with_timeout(request_timeout_secs)).await
}

/// Server backed by a fresh PostgreSQL database, `None` when postgres is unreachable.
pub async fn spawn_pg_app() -> Option<TestApp> {
    let mut configuration = match get_configuration() {
        Ok(configuration) => configuration,
        Err(err) => {
            eprintln!("Skipping tests: no configuration: {}", err);
            return None;
        }
    };
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let store: Arc<dyn ResourceStore> = Arc::new(PgStore::new(pool));
    Some(spawn_with_store(store, configuration).await)
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}
