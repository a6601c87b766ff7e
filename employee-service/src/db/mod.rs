//! データベースアクセス層
//!
//! SQLiteベースの社員レコード永続化

/// 社員CRUD
pub mod employees;

/// データベース接続とマイグレーション
pub mod migrations;
