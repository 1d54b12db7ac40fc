// FICHIER : backend/tests/api_suite/request_bodies.rs

use crate::{init_test_env, send_raw};
use axum::http::{Method, StatusCode};
use inventario::json_db::collections::IdStrategy;
use serde_json::json;

#[tokio::test]
async fn post_without_content_type_creates_bare_record() {
    let env = init_test_env(IdStrategy::LastPlusOne);
    env.seed("items", r#"[{"id":1,"name":"a"}]"#);

    let (status, body) = send_raw(&env.app, Method::POST, "/api/items", None, "").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, "Ítem agregado con éxito");
    assert_eq!(env.stored("items"), json!([{"id": 1, "name": "a"}, {"id": 2}]));

    // Un corps non JSON est ignoré, comme s'il était vide
    let (status, _) = send_raw(
        &env.app,
        Method::POST,
        "/api/items",
        Some("text/plain"),
        r#"{"name":"b"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(env.stored("items")[2], json!({"id": 3}));
}

#[tokio::test]
async fn empty_json_body_counts_as_empty_object() {
    let env = init_test_env(IdStrategy::LastPlusOne);
    env.seed("items", "[]");

    let (status, _) = send_raw(
        &env.app,
        Method::POST,
        "/api/items",
        Some("application/json"),
        "",
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(env.stored("items"), json!([{"id": 1}]));
}

#[tokio::test]
async fn put_without_content_type_is_a_no_op_merge() {
    let env = init_test_env(IdStrategy::LastPlusOne);
    env.seed("items", r#"[{"id":1,"name":"a"}]"#);

    let (status, body) = send_raw(&env.app, Method::PUT, "/api/items/1", None, "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Ítem actualizado con éxito");
    assert_eq!(env.stored("items"), json!([{"id": 1, "name": "a"}]));

    let before = env.raw("items");
    let (status, body) = send_raw(&env.app, Method::PUT, "/api/items/9", None, "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Ítem no encontrado");
    assert_eq!(env.raw("items"), before);
}

#[tokio::test]
async fn malformed_json_body_is_bad_request() {
    let env = init_test_env(IdStrategy::LastPlusOne);
    env.seed("items", "[]");

    let (status, _) = send_raw(
        &env.app,
        Method::POST,
        "/api/items",
        Some("application/json; charset=utf-8"),
        "{ pas du json",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_raw(
        &env.app,
        Method::POST,
        "/api/items",
        Some("application/json"),
        "[1, 2]",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(env.raw("items"), "[]");
}
