//! 型定義

/// 社員エンティティ
pub mod employee;

pub use employee::{Employee, EmployeePayload};
