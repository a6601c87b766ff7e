//! 契約テスト・E2Eテスト共通ヘルパー

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use employee_service::audit::store::{AuditTableStore, SqliteTableStore};
use employee_service::audit::types::{AuditLogEntry, TableName};
use employee_service::common::error::ServiceError;
use employee_service::{api, db, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// テスト用アプリケーション
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub audit_store: Arc<SqliteTableStore>,
}

/// インメモリの社員DBと監査ログストアでアプリを構築する
pub async fn build_app() -> TestApp {
    let db_pool = db::migrations::initialize_database("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    let table = TableName::parse("EmployeeLog").expect("valid table name");
    let audit_store = Arc::new(
        SqliteTableStore::connect("sqlite::memory:", table)
            .await
            .expect("Failed to create audit store"),
    );
    let state = AppState::new(db_pool, audit_store.clone());
    TestApp {
        app: api::create_app(state.clone()),
        state,
        audit_store,
    }
}

/// 監査ログ書き込みが常に失敗するストア
pub struct UnreachableAuditStore;

#[async_trait]
impl AuditTableStore for UnreachableAuditStore {
    async fn ensure_table(&self) -> Result<(), ServiceError> {
        Ok(())
    }

    async fn upsert_entity(&self, _entry: &AuditLogEntry) -> Result<(), ServiceError> {
        Err(ServiceError::AuditStore(
            "connection refused: audit.internal:10002".to_string(),
        ))
    }

    async fn query_partition(
        &self,
        _partition_key: &str,
    ) -> Result<Vec<AuditLogEntry>, ServiceError> {
        Ok(Vec::new())
    }
}

/// 監査ログ書き込みが失敗するアプリを構築する
pub async fn build_app_with_unreachable_audit() -> (Router, AppState) {
    let db_pool = db::migrations::initialize_database("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    let state = AppState::new(db_pool, Arc::new(UnreachableAuditStore));
    (api::create_app(state.clone()), state)
}

/// JSONボディ付きリクエストを送信する
pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// ボディなしリクエストを送信する
pub async fn send_empty(app: &Router, method: &str, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// レスポンスボディをJSONとして読み取る
pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// レスポンスボディのバイト数
pub async fn body_len(response: Response) -> usize {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().len()
}

/// 社員を作成し、作成結果のJSONを返す
pub async fn create_employee(app: &Router, body: Value) -> Value {
    let response = send_json(app, "POST", "/employee", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
