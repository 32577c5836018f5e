//! 디렉터리 호출 주체 컨텍스트
//!
//! 검증된 Bearer 토큰에서만 만들어지며, 요청 본문 값으로는 만들 수 없습니다.
//! 모든 디렉터리 호출에 전달되어 게이트웨이가 호출자 권한으로 동작하게 합니다.

use crate::core::errors::AppError;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::utils::string_utils::email_domain;

/// 인증된 호출자의 주소와 디렉터리 도메인
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    email: String,
    domain: String,
}

impl CallerContext {
    /// 호출자 주소로 컨텍스트를 생성합니다. 도메인은 소문자로 정규화됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 주소 형식이 아니거나 도메인이 비어 있는 경우
    pub fn new(email: impl Into<String>) -> Result<Self, AppError> {
        let email = email.into().trim().to_string();

        let domain = email_domain(&email)
            .filter(|_| !email.starts_with('@'))
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| AppError::AuthenticationError(
                format!("호출자 주소에서 도메인을 확인할 수 없습니다: {}", email)
            ))?;

        Ok(Self { email, domain })
    }

    /// 인증 미들웨어가 저장한 사용자 정보로 컨텍스트를 생성합니다.
    pub fn from_user(user: &AuthenticatedUser) -> Result<Self, AppError> {
        let address = user.directory_address().ok_or_else(|| {
            AppError::AuthenticationError("토큰에 호출자 이메일이 없습니다".to_string())
        })?;
        Self::new(address)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}
