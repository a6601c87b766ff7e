//! Contract Test: PUT /employee/:id

use crate::support::{body_json, body_len, build_app, create_employee, send_empty, send_json};
use axum::http::StatusCode;
use employee_service::audit::store::AuditTableStore;
use employee_service::audit::types::AuditAction;
use serde_json::json;

#[tokio::test]
async fn put_overwrites_fields_and_returns_empty_200() {
    let test_app = build_app().await;
    create_employee(
        &test_app.app,
        json!({"name": "Ana", "extension": "2231", "department": "TI", "salary": 5000}),
    )
    .await;

    let response = send_json(
        &test_app.app,
        "PUT",
        "/employee/1",
        json!({"id": 9, "name": "Ana Souza", "extension": "2231", "department": "TI", "salary": 6000}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_len(response).await, 0);

    let fetched = body_json(send_empty(&test_app.app, "GET", "/employee/1").await).await;
    assert_eq!(fetched["id"], 1);
    assert_eq!(fetched["name"], "Ana Souza");
    assert_eq!(fetched["salary"], 6000.0);

    let response = send_empty(&test_app.app, "GET", "/employee/9").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_unknown_id_returns_404_without_audit_entry() {
    let test_app = build_app().await;

    let response = send_json(
        &test_app.app,
        "PUT",
        "/employee/5",
        json!({"name": "Ghost", "department": "TI"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let entries = test_app.audit_store.query_partition("TI").await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn put_records_update_under_new_department() {
    let test_app = build_app().await;
    create_employee(&test_app.app, json!({"name": "Ana", "department": "TI"})).await;

    let response = send_json(
        &test_app.app,
        "PUT",
        "/employee/1",
        json!({"name": "Ana", "department": "Financeiro"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let ti = test_app.audit_store.query_partition("TI").await.unwrap();
    assert_eq!(ti.len(), 1);
    assert_eq!(ti[0].action, AuditAction::Insertion);

    let finance = test_app
        .audit_store
        .query_partition("Financeiro")
        .await
        .unwrap();
    assert_eq!(finance.len(), 1);
    assert_eq!(finance[0].action, AuditAction::Update);
    assert_eq!(finance[0].department, "Financeiro");
}
