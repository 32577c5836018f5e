//! # 디렉터리 게이트웨이 인터페이스
//!
//! 외부 아이덴티티 디렉터리에 대한 네 가지 조회/명령 연산을 정의합니다.
//! 모든 연산은 [`CallerContext`]를 받아 구현체가 호출자 권한으로 동작할 수 있게 합니다.
//!
//! ## HTTP 상태 매핑 (Google 구현 기준)
//!
//! | 응답 | DirectoryError |
//! |------|----------------|
//! | 404 | `NotFound` |
//! | 401, 403 | `Forbidden` (API 호출의 401은 토큰 거부로 보고 `Unavailable`) |
//! | 408, 429, 5xx, 네트워크 오류 | `Unavailable` |
//! | 그 외 4xx | `Rejected` (디렉터리 메시지 포함) |

use async_trait::async_trait;
use thiserror::Error;
use crate::domain::models::auth::CallerContext;
use crate::domain::models::directory::{
    AccountPage, AccountQuery, CreatedAccount, DirectoryIdentity, NewAccountSpec, OrgUnit,
};

/// 디렉터리 게이트웨이 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("not found")]
    NotFound,

    /// 호출자에게 권한이 없음
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// 일시적 장애 (재시도로 해결 가능)
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// 디렉터리가 요청을 의미적으로 거부함
    #[error("{0}")]
    Rejected(String),
}

impl DirectoryError {
    /// HTTP 상태 코드와 디렉터리 메시지로 에러를 분류합니다.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            404 => DirectoryError::NotFound,
            401 | 403 => DirectoryError::Forbidden(message),
            408 | 429 => DirectoryError::Unavailable(message),
            500..=599 => DirectoryError::Unavailable(message),
            _ => DirectoryError::Rejected(message),
        }
    }
}

/// 디렉터리 조회/명령 인터페이스
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// 전체 조직 단위 목록
    async fn list_org_units(&self, caller: &CallerContext) -> Result<Vec<OrgUnit>, DirectoryError>;

    /// 주소로 계정 한 건 조회. 없으면 `Ok(None)`입니다.
    async fn get_account(
        &self,
        caller: &CallerContext,
        address: &str,
    ) -> Result<Option<DirectoryIdentity>, DirectoryError>;

    /// 계정 목록 한 페이지
    async fn list_accounts(
        &self,
        caller: &CallerContext,
        query: &AccountQuery,
    ) -> Result<AccountPage, DirectoryError>;

    /// 신규 계정 생성
    async fn create_account(
        &self,
        caller: &CallerContext,
        spec: &NewAccountSpec,
    ) -> Result<CreatedAccount, DirectoryError>;
}
