//! 社員エンティティ
//!
//! リレーショナルストアに保存される主レコード

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};

/// 社員レコード
///
/// `id`はリレーショナルストアが採番し、以降変更されない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    /// 社員ID（ストア採番）
    pub id: i64,
    /// 氏名
    pub name: String,
    /// 住所
    pub address: String,
    /// 内線番号
    pub extension: String,
    /// 業務用メールアドレス
    pub professional_email: String,
    /// 部署
    pub department: String,
    /// 給与
    pub salary: f64,
    /// 入社日時
    pub admission_date: Option<NaiveDateTime>,
}

/// 社員作成・更新リクエストのペイロード
///
/// クライアントが`id`を送ってきても無視する。値の検証は行わず、
/// 欠落したフィールドは空文字列 / 0 / null として扱う。文字列フィールドの
/// `null`も空文字列になる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeePayload {
    /// 氏名
    #[serde(alias = "nome", deserialize_with = "null_as_empty")]
    pub name: String,
    /// 住所
    #[serde(alias = "endereco", deserialize_with = "null_as_empty")]
    pub address: String,
    /// 内線番号
    #[serde(alias = "ramal", deserialize_with = "null_as_empty")]
    pub extension: String,
    /// 業務用メールアドレス
    #[serde(alias = "emailProfissional", deserialize_with = "null_as_empty")]
    pub professional_email: String,
    /// 部署
    #[serde(alias = "departamento", deserialize_with = "null_as_empty")]
    pub department: String,
    /// 給与
    #[serde(alias = "salario")]
    pub salary: f64,
    /// 入社日時
    #[serde(alias = "dataAdmissao", deserialize_with = "lenient_admission_date")]
    pub admission_date: Option<NaiveDateTime>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_admission_date<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_admission_date(&raw)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid admission date: '{}'", raw)))
}

/// 入社日時の文字列を解釈する
///
/// RFC 3339（オフセット付きはUTCに変換）、オフセットなしの日時、日付のみ
/// （00:00:00扱い）を受け付ける。
pub fn parse_admission_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc())
        .or_else(|_| raw.parse::<NaiveDateTime>())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

impl Employee {
    /// 更新対象フィールドを上書きする
    ///
    /// 上書きするのは氏名・住所・内線・メール・部署・給与・入社日のみ。
    /// `id`は保持される。
    pub fn apply_update(&mut self, payload: &EmployeePayload) {
        self.name = payload.name.clone();
        self.address = payload.address.clone();
        self.extension = payload.extension.clone();
        self.professional_email = payload.professional_email.clone();
        self.department = payload.department.clone();
        self.salary = payload.salary;
        self.admission_date = payload.admission_date;
    }
}
