use crate::{
    model::api::ValidationResponseDto,
    server::{data::key::KeyStore, router::router, state::AppState},
};
use chrono::{Duration, Utc};
use reqwest::StatusCode;
use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext, factory::key::KeyFactory};


/// Spins up the HTTP router on an OS-assigned port, returning the base URL.
async fn spawn_test_server(test: &TestContext) -> (String, KeyStore) {
    let keys = KeyStore::load(test.keys_path()).await.unwrap();
    let app = router().with_state(AppState::new(keys.clone()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://127.0.0.1:{}", port), keys)
}

/// Posts a JSON body to `/validate`, returning status and parsed body.
async fn post_validate(base: &str, body: serde_json::Value) -> (StatusCode, ValidationResponseDto) {
    let resp = reqwest::Client::new()
        .post(format!("{}/validate", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}
