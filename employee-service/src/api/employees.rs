//! 社員CRUD API
//!
//! GET/POST/PUT/DELETE /employee

use crate::types::{Employee, EmployeePayload};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};

use super::error::AppError;

/// 社員リソースのパス
pub fn employee_location(id: i64) -> String {
    format!("/employee/{}", id)
}

/// GET /employee/:id - 社員取得
///
/// # Returns
/// * `200 OK` - 社員レコード
/// * `404 Not Found` - 社員が存在しない
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, AppError> {
    let employee = state.employee_service.get(id).await?;
    Ok(Json(employee))
}

/// POST /employee - 社員作成
///
/// リクエストボディの`id`は無視され、ストアが採番する。
///
/// # Returns
/// * `201 Created` - 作成された社員（`Location`ヘッダー付き）
/// * `500 Internal Server Error` - ストア書き込み失敗
pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeePayload>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Employee>), AppError> {
    let employee = state.employee_service.create(&payload).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, employee_location(employee.id))],
        Json(employee),
    ))
}

/// PUT /employee/:id - 社員更新
///
/// # Returns
/// * `200 OK` - 更新成功（ボディなし）
/// * `404 Not Found` - 社員が存在しない
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeePayload>,
) -> Result<StatusCode, AppError> {
    state.employee_service.update(id, &payload).await?;
    Ok(StatusCode::OK)
}

/// DELETE /employee/:id - 社員削除
///
/// # Returns
/// * `204 No Content` - 削除成功
/// * `404 Not Found` - 社員が存在しない
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.employee_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
