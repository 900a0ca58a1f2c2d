mod common;

use auth::Role;
use axum::http::Method;
use axum::http::StatusCode;
use common::bare_request;
use common::body_json;
use common::body_string;
use common::json_request;
use common::TestApp;
use product_service::domain::product::models::ProductId;
use serde_json::json;

#[tokio::test]
async fn test_create_as_admin_returns_the_generated_id() {
    let app = TestApp::new();
    let token = app.token_for("alice", Role::Admin);

    let response = app
        .send(json_request(
            Method::POST,
            "/create",
            Some(&token),
            &json!({"name": "Widget", "description": "A widget", "price": 1999}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let id = ProductId::from_string(&body).expect("Body is not a product id");

    let stored = app.store.snapshot(&id).unwrap();
    assert_eq!(stored.name, "Widget");
    assert_eq!(stored.manager, "alice");
}

#[tokio::test]
async fn test_create_with_empty_name_is_rejected() {
    let app = TestApp::new();
    let token = app.token_for("alice", Role::Admin);

    let response = app
        .send(json_request(
            Method::POST,
            "/create",
            Some(&token),
            &json!({"name": "", "description": "Nameless", "price": 100}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Invalid Request");
    assert_eq!(app.store.len(), 0);
}

#[tokio::test]
async fn test_create_as_plain_user_is_unauthorized() {
    let app = TestApp::new();
    let token = app.token_for("bob", Role::User);

    let response = app
        .send(json_request(
            Method::POST,
            "/create",
            Some(&token),
            &json!({"name": "Widget", "description": "A widget", "price": 1999}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.len(), 0);
}

#[tokio::test]
async fn test_create_without_token_is_rejected_at_the_gate() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            Method::POST,
            "/create",
            None,
            &json!({"name": "Widget", "description": "A widget", "price": 1999}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "Missing Auth token");
}

#[tokio::test]
async fn test_one_returns_the_full_product() {
    let app = TestApp::new();
    let id = app.seed_product("Widget", "A widget", 1999).await;

    let response = app
        .send(bare_request(Method::GET, &format!("/one?id={}", id), None))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": id.to_string(),
            "name": "Widget",
            "description": "A widget",
            "price": 1999,
            "manager": "admin",
        })
    );
}

#[tokio::test]
async fn test_one_with_malformed_id_is_rejected() {
    let app = TestApp::new();

    let response = app
        .send(bare_request(Method::GET, "/one?id=not-a-uuid", None))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Invalid Request");
}

#[tokio::test]
async fn test_one_with_unknown_id_is_not_found() {
    let app = TestApp::new();

    let response = app
        .send(bare_request(
            Method::GET,
            &format!("/one?id={}", ProductId::new()),
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "Product not found");
}

#[tokio::test]
async fn test_update_as_admin_overwrites_fields_but_not_the_manager() {
    let app = TestApp::new();
    let id = app.seed_product("Widget", "A widget", 1999).await;
    let token = app.token_for("carol", Role::Admin);

    let response = app
        .send(json_request(
            Method::PUT,
            "/update",
            Some(&token),
            &json!({
                "id": id.to_string(),
                "name": "Gadget",
                "description": "Now a gadget",
                "price": 2499,
            }),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let stored = app.store.snapshot(&id).unwrap();
    assert_eq!(stored.name, "Gadget");
    assert_eq!(stored.price, 2499);
    assert_eq!(stored.manager, "admin");
}

#[tokio::test]
async fn test_update_of_unknown_product_is_not_found() {
    let app = TestApp::new();
    let token = app.token_for("alice", Role::Admin);

    let response = app
        .send(json_request(
            Method::PUT,
            "/update",
            Some(&token),
            &json!({
                "id": ProductId::new().to_string(),
                "name": "Gadget",
                "description": "Ghost",
                "price": 1,
            }),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "Product not found");
}

#[tokio::test]
async fn test_update_as_plain_user_leaves_the_store_untouched() {
    let app = TestApp::new();
    let id = app.seed_product("Widget", "A widget", 1999).await;
    let token = app.token_for("bob", Role::User);

    let response = app
        .send(json_request(
            Method::PUT,
            "/update",
            Some(&token),
            &json!({
                "id": id.to_string(),
                "name": "Gadget",
                "description": "Hijacked",
                "price": 1,
            }),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.snapshot(&id).unwrap().name, "Widget");
}

#[tokio::test]
async fn test_delete_as_admin_removes_the_product() {
    let app = TestApp::new();
    let id = app.seed_product("Widget", "A widget", 1999).await;
    let token = app.token_for("alice", Role::Admin);

    let response = app
        .send(bare_request(
            Method::DELETE,
            &format!("/delete?id={}", id),
            Some(&token),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "product removed");
    assert!(app.store.snapshot(&id).is_none());
}

#[tokio::test]
async fn test_delete_of_unknown_product_is_not_found() {
    let app = TestApp::new();
    let token = app.token_for("alice", Role::Admin);

    let response = app
        .send(bare_request(
            Method::DELETE,
            &format!("/delete?id={}", ProductId::new()),
            Some(&token),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "Product not found");
}

#[tokio::test]
async fn test_list_is_public_and_omits_the_manager() {
    let app = TestApp::new();
    let widget = app.seed_product("Widget", "A widget", 1999).await;
    let gadget = app.seed_product("Gadget", "A gadget", 2499).await;

    let response = app.send(bare_request(Method::GET, "/list", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([
            {
                "id": gadget.to_string(),
                "name": "Gadget",
                "description": "A gadget",
                "price": 2499,
            },
            {
                "id": widget.to_string(),
                "name": "Widget",
                "description": "A widget",
                "price": 1999,
            },
        ])
    );
}

#[tokio::test]
async fn test_unmatched_paths_fall_through_to_not_found() {
    let app = TestApp::new();

    let response = app.send(bare_request(Method::GET, "/nowhere", None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "Not found");
}
