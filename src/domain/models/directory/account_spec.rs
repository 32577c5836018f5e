//! 계정 생성 명령 모델
//!
//! 직렬화 결과가 Directory API `users.insert` 요청 본문과 일치합니다.

use serde::{Deserialize, Serialize};
use crate::domain::models::directory::temporary_credential::TemporaryCredential;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub given_name: String,
    pub family_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhoneEntry {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationEntry {
    pub title: String,
    pub department: String,
    pub primary: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailEntry {
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelationEntry {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// 신규 계정 생성 명령
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccountSpec {
    pub name: PersonName,
    pub primary_email: String,
    pub password: TemporaryCredential,
    pub change_password_at_next_login: bool,
    pub org_unit_path: String,
    pub phones: Vec<PhoneEntry>,
    pub organizations: Vec<OrganizationEntry>,
    pub emails: Vec<EmailEntry>,
    pub recovery_email: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<RelationEntry>,
}

/// 디렉터리가 생성 후 돌려준 계정 정보
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedAccount {
    #[serde(default)]
    pub id: Option<String>,
    pub primary_email: String,
}
