//! Contract Test: DELETE /employee/:id

use crate::support::{body_len, build_app, create_employee, send_empty};
use axum::http::StatusCode;
use employee_service::audit::store::AuditTableStore;
use employee_service::audit::types::AuditAction;
use serde_json::json;

#[tokio::test]
async fn delete_returns_204_and_removes_record() {
    let test_app = build_app().await;
    create_employee(&test_app.app, json!({"name": "Ana", "department": "TI"})).await;

    let response = send_empty(&test_app.app, "DELETE", "/employee/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(body_len(response).await, 0);

    let response = send_empty(&test_app.app, "GET", "/employee/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_records_pre_deletion_snapshot() {
    let test_app = build_app().await;
    create_employee(
        &test_app.app,
        json!({"name": "Ana", "department": "TI", "salary": 5000}),
    )
    .await;

    send_empty(&test_app.app, "DELETE", "/employee/1").await;

    let entries = test_app.audit_store.query_partition("TI").await.unwrap();
    let removal = entries.last().unwrap();
    assert_eq!(removal.action, AuditAction::Removal);
    assert_eq!(removal.employee_id, 1);
    assert_eq!(removal.name, "Ana");
    assert_eq!(removal.salary, 5000.0);
}

#[tokio::test]
async fn repeated_delete_returns_404_without_second_entry() {
    let test_app = build_app().await;
    create_employee(&test_app.app, json!({"name": "Ana", "department": "TI"})).await;

    let first = send_empty(&test_app.app, "DELETE", "/employee/1").await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    let second = send_empty(&test_app.app, "DELETE", "/employee/1").await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    let removals = test_app
        .audit_store
        .query_partition("TI")
        .await
        .unwrap()
        .into_iter()
        .filter(|entry| entry.action == AuditAction::Removal)
        .count();
    assert_eq!(removals, 1);
}

#[tokio::test]
async fn deleted_id_is_not_reused() {
    let test_app = build_app().await;
    create_employee(&test_app.app, json!({"name": "Ana", "department": "TI"})).await;
    send_empty(&test_app.app, "DELETE", "/employee/1").await;

    let body = create_employee(&test_app.app, json!({"name": "Bruno", "department": "TI"})).await;
    assert_eq!(body["id"], 2);
}
