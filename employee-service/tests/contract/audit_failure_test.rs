//! Contract Test: 監査ログ書き込み失敗時の挙動
//!
//! 社員DBのコミット後に監査ログ書き込みが失敗した場合、500を返すが
//! 社員レコードの変更は残る。

use crate::support::{body_json, build_app_with_unreachable_audit, send_empty, send_json};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_returns_500_but_record_persists() {
    let (app, state) = build_app_with_unreachable_audit().await;

    let response = send_json(
        &app,
        "POST",
        "/employee",
        json!({"name": "Ana", "department": "TI"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Audit log error");
    assert!(!body.to_string().contains("audit.internal"));

    let employee = state.employee_service.get(1).await.unwrap();
    assert_eq!(employee.name, "Ana");
}

#[tokio::test]
async fn delete_returns_500_but_record_is_gone() {
    let (app, state) = build_app_with_unreachable_audit().await;
    let _ = send_json(
        &app,
        "POST",
        "/employee",
        json!({"name": "Ana", "department": "TI"}),
    )
    .await;

    let response = send_empty(&app, "DELETE", "/employee/1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    assert!(state.employee_service.get(1).await.is_err());
    let response = send_empty(&app, "GET", "/employee/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
