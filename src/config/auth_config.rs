//! # Authentication Configuration Module
//!
//! 호출자(운영자) Bearer 토큰 검증에 필요한 JWT 설정을 관리합니다.
//!
//! 이 서비스는 토큰을 발급하지 않습니다. 상위 인증 서비스가 HS256으로 서명한
//! 토큰을 같은 시크릿으로 검증하기만 합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="shared-hs256-secret"
//! export JWT_LEEWAY_SECS="30"   # 선택, 만료 시각 허용 오차
//! ```

use std::env;
use crate::core::errors::AppError;

/// JWT 토큰 검증 설정
pub struct JwtConfig;

impl JwtConfig {
    /// HS256 서명 검증용 시크릿을 반환합니다.
    ///
    /// 기본값이 없습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `JWT_SECRET`이 없거나 비어 있는 경우
    pub fn secret() -> Result<String, AppError> {
        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => Ok(secret),
            _ => Err(AppError::InternalError("JWT_SECRET must be set".to_string())),
        }
    }

    /// 만료 시각 검증 허용 오차(초). 기본값: 30
    pub fn leeway_secs() -> u64 {
        env::var("JWT_LEEWAY_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
    }
}
