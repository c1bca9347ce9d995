//! Shared helpers for router tests
#![allow(dead_code)]

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tower::ServiceExt;

use sudoku_server::DbConfig;

/// Pool pointing at a port nothing listens on; every query fails fast.
pub fn unreachable_pool() -> PgPool {
    let config = DbConfig {
        host: Some("127.0.0.1".into()),
        port: Some(1),
        user: Some("sudoku".into()),
        database: Some("sudoku".into()),
        ..DbConfig::default()
    };

    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy_with(config.connect_options())
}

/// Pool for the database named by `DATABASE_URL`, with the fixture schema applied.
pub async fn fixture_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("pool creation failed");

    sqlx::raw_sql(include_str!("../fixtures/schema.sql"))
        .execute(&pool)
        .await
        .expect("schema setup failed");

    pool
}

/// Like [`fixture_pool`], but on the `integer_ids` schema where ids are
/// `SERIAL`/`INTEGER` columns.
pub async fn integer_id_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let options: PgConnectOptions = url.parse().expect("invalid DATABASE_URL");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(options.options([("search_path", "integer_ids")]))
        .await
        .expect("pool creation failed");

    sqlx::raw_sql(include_str!("../fixtures/schema_integer_ids.sql"))
        .execute(&pool)
        .await
        .expect("schema setup failed");

    pool
}

/// Send one request through the router, returning status and parsed JSON body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}
