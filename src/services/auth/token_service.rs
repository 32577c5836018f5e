//! JWT 토큰 검증 서비스 구현
//!
//! 상위 인증 서비스가 HS256으로 서명한 운영자 토큰을 검증합니다.
//! 이 서비스는 토큰을 발급하지 않습니다.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use jsonwebtoken::errors::ErrorKind;
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

/// JWT 토큰 검증 서비스
///
/// 시작 시 한 번 생성되어 `ServiceLocator`에 등록됩니다.
pub struct TokenService {
    decoding_key: DecodingKey,
    leeway_secs: u64,
}

impl TokenService {
    pub fn new(secret: &str, leeway_secs: u64) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            leeway_secs,
        }
    }

    /// 환경 설정으로 서비스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `JWT_SECRET` 미설정
    pub fn from_env() -> Result<Self, AppError> {
        let secret = JwtConfig::secret()?;
        Ok(Self::new(&secret, JwtConfig::leeway_secs()))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명/알고리즘
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let claims = token_service.verify_token(token)?;
    /// println!("Operator: {}", claims.sub);
    /// ```
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식 또는 빈 토큰
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ").map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}
