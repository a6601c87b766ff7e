//! REST APIハンドラー
//!
//! 社員CRUDと監査ログ参照

/// 監査ログ参照
pub mod audit_log;
/// 社員CRUD
pub mod employees;
/// エラーレスポンス
pub mod error;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/employee", post(employees::create_employee))
        .route(
            "/employee/:id",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route(
            "/employee-log/:department",
            get(audit_log::list_audit_entries),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
