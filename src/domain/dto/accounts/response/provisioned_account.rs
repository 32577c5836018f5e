//! 계정 생성 응답 DTO
use serde::{Deserialize, Serialize};

/// 매니저 참조
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerReference {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// 생성된 계정 요약
///
/// 요청 필드와 디렉터리가 돌려준 정규 기본 주소로 한 번 만들어지며 이후 다시 조회하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionedAccount {
    pub email: String,
    pub name: String,
    pub department: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<ManagerReference>,
}

/// `POST /api/v1/accounts` 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountResponse {
    pub success: bool,
    pub message: String,
    pub account: ProvisionedAccount,
}

impl CreateAccountResponse {
    pub fn created(account: ProvisionedAccount) -> Self {
        Self {
            success: true,
            message: format!("account {} created", account.email),
            account,
        }
    }
}
