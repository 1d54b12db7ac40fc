// FICHIER : backend/tests/api_suite/crud_scenario.rs

use crate::{init_test_env, send};
use axum::http::{Method, StatusCode};
use inventario::json_db::collections::IdStrategy;
use serde_json::{json, Value};

#[tokio::test]
async fn items_full_scenario() {
    let env = init_test_env(IdStrategy::LastPlusOne);
    env.seed("items", r#"[{"id":1,"name":"a"},{"id":2,"name":"b"}]"#);

    // POST => id 3 ajouté en fin
    let (status, body) = send(&env.app, Method::POST, "/api/items", Some(json!({"name": "c"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, "Ítem agregado con éxito");
    assert_eq!(
        env.stored("items"),
        json!([{"id":1,"name":"a"},{"id":2,"name":"b"},{"id":3,"name":"c"}])
    );

    // PUT => fusion sur l'élément 2
    let (status, body) = send(&env.app, Method::PUT, "/api/items/2", Some(json!({"name": "b2"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Ítem actualizado con éxito");
    assert_eq!(env.stored("items")[1], json!({"id": 2, "name": "b2"}));

    // DELETE => l'élément 1 disparaît, l'ordre reste
    let (status, body) = send(&env.app, Method::DELETE, "/api/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Ítem eliminado con éxito");
    assert_eq!(
        env.stored("items"),
        json!([{"id":2,"name":"b2"},{"id":3,"name":"c"}])
    );

    // GET => exactement le contenu du disque
    let (status, body) = send(&env.app, Method::GET, "/api/items", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(listed, env.stored("items"));
}

#[tokio::test]
async fn file_is_pretty_printed_with_two_spaces() {
    let env = init_test_env(IdStrategy::LastPlusOne);
    env.seed("clientes", "[]");

    let (status, _) = send(&env.app, Method::POST, "/api/clientes", Some(json!({"nombre": "Ana"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        env.raw("clientes"),
        "[\n  {\n    \"nombre\": \"Ana\",\n    \"id\": 1\n  }\n]"
    );
}

#[tokio::test]
async fn create_overwrites_payload_id_and_duplicates_in_legacy_mode() {
    let env = init_test_env(IdStrategy::LastPlusOne);
    env.seed("items", r#"[{"id":5,"name":"x"},{"id":4,"name":"y"}]"#);

    let (status, _) = send(&env.app, Method::POST, "/api/items", Some(json!({"id": 100, "name": "z"}))).await;
    assert_eq!(status, StatusCode::CREATED);

    // Dernier id = 4 => nouvel id 5, déjà utilisé
    let stored = env.stored("items");
    assert_eq!(stored[2], json!({"id": 5, "name": "z"}));
    assert_eq!(stored[0]["id"], stored[2]["id"]);

    // PUT ne touche que le premier enregistrement portant l'id
    let (status, _) = send(&env.app, Method::PUT, "/api/items/5", Some(json!({"name": "x2"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        env.stored("items"),
        json!([{"id":5,"name":"x2"},{"id":4,"name":"y"},{"id":5,"name":"z"}])
    );

    // DELETE retire tous les enregistrements portant l'id
    let (status, _) = send(&env.app, Method::DELETE, "/api/items/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(env.stored("items"), json!([{"id": 4, "name": "y"}]));
}

#[tokio::test]
async fn trailing_slash_routes_match() {
    let env = init_test_env(IdStrategy::LastPlusOne);
    env.seed("items", r#"[{"id":1,"name":"a"}]"#);

    let (status, body) = send(&env.app, Method::GET, "/api/items/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), env.stored("items"));

    let (status, _) = send(&env.app, Method::POST, "/api/items/", Some(json!({"name": "b"}))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&env.app, Method::PUT, "/api/items/2/", Some(json!({"name": "b2"}))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&env.app, Method::DELETE, "/api/items/1/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(env.stored("items"), json!([{"id": 2, "name": "b2"}]));
}

#[tokio::test]
async fn create_uses_max_id_when_configured() {
    let env = init_test_env(IdStrategy::MaxPlusOne);
    env.seed("items", r#"[{"id":5,"name":"x"},{"id":4,"name":"y"}]"#);

    let (status, _) = send(&env.app, Method::POST, "/api/items", Some(json!({"name": "z"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(env.stored("items")[2], json!({"id": 6, "name": "z"}));
}

#[tokio::test]
async fn update_can_overwrite_id() {
    let env = init_test_env(IdStrategy::LastPlusOne);
    env.seed("items", r#"[{"id":1,"name":"a","qty":2}]"#);

    let (status, _) = send(&env.app, Method::PUT, "/api/items/1", Some(json!({"id": 7}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(env.stored("items"), json!([{"id": 7, "name": "a", "qty": 2}]));

    // L'ancien id n'existe plus
    let (status, _) = send(&env.app, Method::PUT, "/api/items/1", Some(json!({"qty": 3}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_on_empty_collection_starts_at_one() {
    let env = init_test_env(IdStrategy::LastPlusOne);
    env.seed("items", "[]");

    send(&env.app, Method::POST, "/api/items", Some(json!({"name": "a"}))).await;
    send(&env.app, Method::DELETE, "/api/items/1", None).await;
    let (status, _) = send(&env.app, Method::POST, "/api/items", Some(json!({"name": "b"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(env.stored("items"), json!([{"id": 1, "name": "b"}]));
}
