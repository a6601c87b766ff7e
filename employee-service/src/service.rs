//! 社員レコードサービス
//!
//! リレーショナルストアへの変更をコミットした後に、監査ログストアへ
//! エントリを1件書き込む。両ストア間にトランザクション保証はない。
//! 監査ログの書き込みに失敗した場合、社員レコードの変更はロールバックされず
//! エラーだけが呼び出し元に返る（監査証跡からそのイベントが欠落する）。

use crate::audit::store::AuditTableStore;
use crate::audit::types::{AuditAction, AuditLogEntry};
use crate::common::error::{ServiceError, ServiceResult};
use crate::db::employees::EmployeeStorage;
use crate::types::{Employee, EmployeePayload};
use std::sync::Arc;
use tracing::{error, info};

/// 社員CRUDと監査ログ記録を調停するサービス
#[derive(Clone)]
pub struct EmployeeService {
    employees: EmployeeStorage,
    audit_store: Arc<dyn AuditTableStore>,
}

impl EmployeeService {
    /// 新しいサービスを作成
    pub fn new(employees: EmployeeStorage, audit_store: Arc<dyn AuditTableStore>) -> Self {
        Self {
            employees,
            audit_store,
        }
    }

    /// IDで社員を取得（監査ログは記録しない）
    pub async fn get(&self, id: i64) -> ServiceResult<Employee> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::EmployeeNotFound(id))
    }

    /// 社員を作成し、Insertionエントリを記録する
    pub async fn create(&self, payload: &EmployeePayload) -> ServiceResult<Employee> {
        let employee = self.employees.add(payload).await?;
        info!(employee_id = employee.id, "Employee created");

        self.record(&employee, AuditAction::Insertion).await?;
        Ok(employee)
    }

    /// 社員を更新し、Updateエントリを記録する
    ///
    /// 上書き対象は[`Employee::apply_update`]のフィールドのみ。
    pub async fn update(&self, id: i64, payload: &EmployeePayload) -> ServiceResult<Employee> {
        let mut employee = self.get(id).await?;
        employee.apply_update(payload);

        // 検索後に並行削除された場合
        if !self.employees.update(&employee).await? {
            return Err(ServiceError::EmployeeNotFound(id));
        }
        info!(employee_id = id, "Employee updated");

        self.record(&employee, AuditAction::Update).await?;
        Ok(employee)
    }

    /// 社員を削除し、削除前のスナップショットでRemovalエントリを記録する
    pub async fn delete(&self, id: i64) -> ServiceResult<Employee> {
        let employee = self.get(id).await?;

        if !self.employees.remove(id).await? {
            return Err(ServiceError::EmployeeNotFound(id));
        }
        info!(employee_id = id, "Employee removed");

        self.record(&employee, AuditAction::Removal).await?;
        Ok(employee)
    }

    /// 部署（パーティション）単位で監査ログを取得
    pub async fn audit_entries(&self, department: &str) -> ServiceResult<Vec<AuditLogEntry>> {
        self.audit_store.query_partition(department).await
    }

    async fn record(&self, employee: &Employee, action: AuditAction) -> ServiceResult<()> {
        let entry = AuditLogEntry::record(employee, action);
        match self.audit_store.upsert_entity(&entry).await {
            Ok(()) => {
                info!(
                    employee_id = employee.id,
                    action = %action,
                    partition_key = %entry.partition_key,
                    row_key = %entry.row_key,
                    "Audit log entry recorded"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    employee_id = employee.id,
                    action = %action,
                    "Employee change committed but audit log write failed: {}",
                    e
                );
                Err(e)
            }
        }
    }
}
