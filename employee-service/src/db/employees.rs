// 社員CRUD操作
//
// 変更系の操作はすべて明示的なトランザクション内で実行し、
// メソッドから戻る前にコミットする。

use crate::common::error::ServiceError;
use crate::types::{Employee, EmployeePayload};
use sqlx::SqlitePool;

/// 社員テーブル名
pub const EMPLOYEES_TABLE: &str = "employees";

const SELECT_COLUMNS: &str =
    "id, name, address, extension, professional_email, department, salary, admission_date";

/// 社員テーブルのストレージ（リレーショナルストア）
#[derive(Clone)]
pub struct EmployeeStorage {
    pool: SqlitePool,
}

impl EmployeeStorage {
    /// 新しいストレージを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// IDで社員を検索
    ///
    /// # Returns
    /// * `Ok(Some(Employee))` - 社員が見つかった
    /// * `Ok(None)` - 社員が見つからなかった
    /// * `Err(ServiceError)` - 検索失敗
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, ServiceError> {
        let query = format!("SELECT {} FROM employees WHERE id = ?", SELECT_COLUMNS);
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ServiceError::Database(format!("Failed to find employee: {}", e)))
    }

    /// 社員を追加してコミット
    ///
    /// IDはストアが採番する。
    ///
    /// # Returns
    /// * `Ok(Employee)` - 採番済みIDを含む保存後のレコード
    /// * `Err(ServiceError)` - 追加またはコミット失敗
    pub async fn add(&self, payload: &EmployeePayload) -> Result<Employee, ServiceError> {
        let mut tx = self.pool.begin().await.map_err(begin_error)?;

        let result = sqlx::query(
            "INSERT INTO employees (name, address, extension, professional_email, department, salary, admission_date)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&payload.name)
        .bind(&payload.address)
        .bind(&payload.extension)
        .bind(&payload.professional_email)
        .bind(&payload.department)
        .bind(payload.salary)
        .bind(payload.admission_date)
        .execute(&mut *tx)
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to add employee: {}", e)))?;

        tx.commit().await.map_err(commit_error)?;

        Ok(Employee {
            id: result.last_insert_rowid(),
            name: payload.name.clone(),
            address: payload.address.clone(),
            extension: payload.extension.clone(),
            professional_email: payload.professional_email.clone(),
            department: payload.department.clone(),
            salary: payload.salary,
            admission_date: payload.admission_date,
        })
    }

    /// 既存社員を上書き更新してコミット
    ///
    /// `id`は条件としてのみ使用し、書き換えない。
    ///
    /// # Returns
    /// * `Ok(true)` - 更新成功
    /// * `Ok(false)` - 該当IDが存在しない
    pub async fn update(&self, employee: &Employee) -> Result<bool, ServiceError> {
        let mut tx = self.pool.begin().await.map_err(begin_error)?;

        let result = sqlx::query(
            "UPDATE employees
             SET name = ?, address = ?, extension = ?, professional_email = ?,
                 department = ?, salary = ?, admission_date = ?
             WHERE id = ?",
        )
        .bind(&employee.name)
        .bind(&employee.address)
        .bind(&employee.extension)
        .bind(&employee.professional_email)
        .bind(&employee.department)
        .bind(employee.salary)
        .bind(employee.admission_date)
        .bind(employee.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to update employee: {}", e)))?;

        tx.commit().await.map_err(commit_error)?;

        Ok(result.rows_affected() > 0)
    }

    /// 社員を削除してコミット（物理削除）
    ///
    /// # Returns
    /// * `Ok(true)` - 削除成功
    /// * `Ok(false)` - 該当IDが存在しない
    pub async fn remove(&self, id: i64) -> Result<bool, ServiceError> {
        let mut tx = self.pool.begin().await.map_err(begin_error)?;

        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| ServiceError::Database(format!("Failed to remove employee: {}", e)))?;

        tx.commit().await.map_err(commit_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn begin_error(e: sqlx::Error) -> ServiceError {
    ServiceError::Database(format!("Failed to begin transaction: {}", e))
}

fn commit_error(e: sqlx::Error) -> ServiceError {
    ServiceError::Database(format!("Failed to commit transaction: {}", e))
}
