//! HTTP-level integration tests for the lock endpoints: CRUD, the
//! lock/unlock state machine, and the docked-bicycle lookup.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_bicycle, create_lock, delete, get, post_empty, post_json};

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_lock_returns_201_with_wire_field_names() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/locks",
        serde_json::json!({
            "numero": 1,
            "localizacao": "Praça Central",
            "anoDeFabricacao": "2022",
            "modelo": "T-100",
            "status": "LIVRE",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["anoDeFabricacao"], "2022");
    assert_eq!(json["status"], "LIVRE");
    assert_eq!(json["bicicleta"], serde_json::Value::Null);
}

#[tokio::test]
async fn create_lock_with_bicycle_status_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/locks",
        serde_json::json!({
            "numero": 1,
            "localizacao": "Praça Central",
            "anoDeFabricacao": "2022",
            "modelo": "T-100",
            "status": "EM_USO",
        }),
    )
    .await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn get_nonexistent_lock_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/locks/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Lock / unlock state machine
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lock_unlock_cycle_with_bicycle() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;
    let bicycle_id = create_bicycle(&app, "DISPONIVEL").await;

    // Engage, docking the bicycle.
    let response = post_json(
        app.clone(),
        &format!("/api/v1/locks/{lock_id}/lock"),
        serde_json::json!({"bicicleta": bicycle_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "OCUPADA");
    assert_eq!(json["bicicleta"].as_i64().unwrap(), bicycle_id);

    // A second engage on the now-occupied lock is rejected.
    let response = post_empty(app.clone(), &format!("/api/v1/locks/{lock_id}/lock")).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "INVALID_TRANSITION");

    // Release with the matching bicycle id clears the reference.
    let response = post_json(
        app,
        &format!("/api/v1/locks/{lock_id}/unlock"),
        serde_json::json!({"bicicleta": bicycle_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "LIVRE");
    assert_eq!(json["bicicleta"], serde_json::Value::Null);
}

#[tokio::test]
async fn lock_without_body_works() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;

    let response = post_empty(app, &format!("/api/v1/locks/{lock_id}/lock")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "OCUPADA");
    assert_eq!(json["bicicleta"], serde_json::Value::Null);
}

#[tokio::test]
async fn lock_with_unknown_bicycle_returns_404() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/locks/{lock_id}/lock"),
        serde_json::json!({"bicicleta": 999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The failed engage left the lock untouched.
    let json = body_json(get(app, &format!("/api/v1/locks/{lock_id}")).await).await;
    assert_eq!(json["status"], "LIVRE");
}

#[tokio::test]
async fn unlock_free_lock_returns_422() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;

    let response = post_empty(app, &format!("/api/v1/locks/{lock_id}/unlock")).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn lock_unknown_lock_returns_404() {
    let app = common::build_test_app();
    let response = post_empty(app, "/api/v1/locks/999/lock").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unlock_with_mismatched_bicycle_keeps_reference() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;
    let bicycle_id = create_bicycle(&app, "DISPONIVEL").await;

    post_json(
        app.clone(),
        &format!("/api/v1/locks/{lock_id}/lock"),
        serde_json::json!({"bicicleta": bicycle_id}),
    )
    .await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/locks/{lock_id}/unlock"),
        serde_json::json!({"bicicleta": bicycle_id + 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Stale reference survives on the now-free lock.
    let json = body_json(get(app, &format!("/api/v1/locks/{lock_id}")).await).await;
    assert_eq!(json["status"], "LIVRE");
    assert_eq!(json["bicicleta"].as_i64().unwrap(), bicycle_id);
}

// ---------------------------------------------------------------------------
// Coarse status endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn trancar_directive_sets_occupied() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;

    let response = post_empty(app, &format!("/api/v1/locks/{lock_id}/status/TRANCAR")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "OCUPADA");
}

#[tokio::test]
async fn destrancar_directive_sets_free() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "OCUPADA").await;

    let response = post_empty(app, &format!("/api/v1/locks/{lock_id}/status/DESTRANCAR")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "LIVRE");
}

#[tokio::test]
async fn plain_status_value_accepted() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;

    let response = post_empty(app, &format!("/api/v1/locks/{lock_id}/status/EM_REPARO")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "EM_REPARO");
}

#[tokio::test]
async fn unknown_status_value_returns_400() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;

    let response = post_empty(app, &format!("/api/v1/locks/{lock_id}/status/ABRIR")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Docked bicycle lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_lock_bicycle_resolves_docked_bicycle() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;
    let bicycle_id = create_bicycle(&app, "DISPONIVEL").await;

    post_json(
        app.clone(),
        &format!("/api/v1/locks/{lock_id}/lock"),
        serde_json::json!({"bicicleta": bicycle_id}),
    )
    .await;

    let response = get(app, &format!("/api/v1/locks/{lock_id}/bicycle")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"].as_i64().unwrap(), bicycle_id);
}

#[tokio::test]
async fn get_lock_bicycle_404_when_none_docked() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;

    let response = get(app, &format!("/api/v1/locks/{lock_id}/bicycle")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_lock_bicycle_404_for_unknown_lock() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/locks/999/bicycle").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_lock_bicycle_404_when_reference_dangles() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;
    let bicycle_id = create_bicycle(&app, "DISPONIVEL").await;

    post_json(
        app.clone(),
        &format!("/api/v1/locks/{lock_id}/lock"),
        serde_json::json!({"bicicleta": bicycle_id}),
    )
    .await;
    // Mismatched unlock leaves the stale reference on a free lock, so the
    // bicycle can then be deleted.
    post_json(
        app.clone(),
        &format!("/api/v1/locks/{lock_id}/unlock"),
        serde_json::json!({"bicicleta": bicycle_id + 1}),
    )
    .await;
    let response = delete(app.clone(), &format!("/api/v1/bicycles/{bicycle_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/locks/{lock_id}/bicycle")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete policy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_occupied_lock_returns_409() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;
    post_empty(app.clone(), &format!("/api/v1/locks/{lock_id}/lock")).await;

    let response = delete(app, &format!("/api/v1/locks/{lock_id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_docked_bicycle_returns_409() {
    let app = common::build_test_app();
    let lock_id = create_lock(&app, "LIVRE").await;
    let bicycle_id = create_bicycle(&app, "DISPONIVEL").await;
    post_json(
        app.clone(),
        &format!("/api/v1/locks/{lock_id}/lock"),
        serde_json::json!({"bicicleta": bicycle_id}),
    )
    .await;

    let response = delete(app, &format!("/api/v1/bicycles/{bicycle_id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
