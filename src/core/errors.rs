//! # Application Error Handling System
//!
//! 프로비저닝 백엔드 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 파이프라인 자체의 실패(권한 거부, 중복, 검증 실패 등)는
//! [`ProvisioningError`](crate::services::provisioning::ProvisioningError)가 담당하고,
//! 이 모듈의 [`AppError`]는 그 바깥의 횡단 관심사를 담당합니다.
//!
//! ## 에러 계층
//!
//! ```text
//! HTTP 요청
//!    │
//!    ├─ 본문 JSON 파싱 ────────► AppError::ValidationError (400)
//!    │
//!    ├─ 인증 미들웨어 ─────────► AppError::AuthenticationError (401)
//!    │
//!    ├─ 설정/레지스트리 ───────► AppError::InternalError (500)
//!    │
//!    ├─ 웰컴 웹훅 ─────────────► AppError::ExternalServiceError (로그만, 응답 없음)
//!    │
//!    └─ 계정 생성, OU/사용자 목록 ► ProvisioningError (403/409/400/503/422)
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | `error` 코드 | 사용 시나리오 |
//! |----------|-------------|--------------|---------------|
//! | `ValidationError` | 400 Bad Request | `invalid_request` | 요청 본문 형식 오류 |
//! | `AuthenticationError` | 401 Unauthorized | `authentication_required` | 토큰 누락/만료/위조 |
//! | `ExternalServiceError` | 502 Bad Gateway | `external_service_error` | 웰컴 웹훅 실패 |
//! | `InternalError` | 500 Internal Server Error | `internal_error` | 설정 누락, 예상치 못한 오류 |
//!
//! 응답 본문은 [`ProvisioningError`](crate::services::provisioning::ProvisioningError)와 같은
//! `{"success": false, "error": code, "message": ...}` 형식입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, ErrorContext};
//!
//! let key = EncodingKey::from_rsa_pem(pem.as_bytes())
//!     .context("서비스 계정 개인키 파싱 실패")?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?` 연산자만으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// Bearer 토큰이 없거나, 서명이 잘못되었거나, 만료된 경우입니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    ///
    /// 웰컴 웹훅이 요청을 받지 못했거나 실패 상태를 돌려준 경우입니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 기계 판독용 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "invalid_request",
            AppError::AuthenticationError(_) => "authentication_required",
            AppError::ExternalServiceError(_) => "external_service_error",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"success": false, "error": code, "message": "..."}` 형식을 따릅니다.
    /// 5xx 에러는 서버 로그에 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패 ({}): {}", status, self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "success": false,
                "error": self.code(),
                "message": self.to_string()
            }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let key = EncodingKey::from_rsa_pem(pem.as_bytes())
///     .context("서비스 계정 개인키 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 `AppError::InternalError`로 변환합니다.
    fn context(self, msg: &str) -> Result<T, AppError>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
