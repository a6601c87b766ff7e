//! 監査ログ参照API

use crate::audit::types::AuditLogEntry;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::error::AppError;

/// 監査ログ一覧レスポンス
#[derive(Debug, Serialize)]
pub struct AuditLogListResponse {
    /// エントリ一覧（古い順）
    pub entries: Vec<AuditLogEntry>,
}

/// GET /employee-log/:department - 部署単位の監査ログ取得
///
/// 該当エントリがない部署は空配列を返す。
pub async fn list_audit_entries(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<Json<AuditLogListResponse>, AppError> {
    let entries = state.employee_service.audit_entries(&department).await?;
    Ok(Json(AuditLogListResponse { entries }))
}
