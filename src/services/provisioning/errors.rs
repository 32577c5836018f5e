//! 계정 생성 파이프라인 에러
//!
//! | ProvisioningError | HTTP Status | code |
//! |-------------------|-------------|------|
//! | `PrivilegeDenied` | 403 Forbidden | `privilege_denied` |
//! | `DuplicateIdentity` | 409 Conflict | `duplicate_identity` |
//! | `ValidationFailed` | 400 Bad Request | `validation_failed` |
//! | `DirectoryUnavailable` | 503 Service Unavailable | `directory_unavailable` |
//! | `CreateRejected` | 422 Unprocessable Entity | `create_rejected` |
//!
//! 응답 본문: `{"success": false, "error": code, "message": ..., "field": ...}`

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use crate::repositories::directory::DirectoryError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProvisioningError {
    #[error("not super admin")]
    PrivilegeDenied,

    #[error("email already exists: {0}")]
    DuplicateIdentity(String),

    #[error("{reason}")]
    ValidationFailed { field: String, reason: String },

    #[error("{0}")]
    DirectoryUnavailable(String),

    #[error("creation failed: {0}")]
    CreateRejected(String),
}

impl ProvisioningError {
    pub fn code(&self) -> &'static str {
        match self {
            ProvisioningError::PrivilegeDenied => "privilege_denied",
            ProvisioningError::DuplicateIdentity(_) => "duplicate_identity",
            ProvisioningError::ValidationFailed { .. } => "validation_failed",
            ProvisioningError::DirectoryUnavailable(_) => "directory_unavailable",
            ProvisioningError::CreateRejected(_) => "create_rejected",
        }
    }

    /// 중복 검사 단계의 디렉터리 실패
    pub fn scan_failed(error: DirectoryError) -> Self {
        let reason = match error {
            DirectoryError::Unavailable(reason) => reason,
            other => other.to_string(),
        };
        ProvisioningError::DirectoryUnavailable(format!("directory unavailable: {}", reason))
    }

    /// OU/사용자 목록 조회 실패. 권한 거부는 그대로 거부로 보고합니다.
    pub fn query_failed(error: DirectoryError) -> Self {
        match error {
            DirectoryError::Forbidden(_) => ProvisioningError::PrivilegeDenied,
            other => Self::scan_failed(other),
        }
    }

    /// 생성 단계의 디렉터리 실패. 재시도하지 않습니다.
    pub fn create_failed(error: DirectoryError) -> Self {
        match error {
            DirectoryError::Rejected(reason) => ProvisioningError::CreateRejected(reason),
            DirectoryError::Forbidden(reason) => ProvisioningError::CreateRejected(reason),
            DirectoryError::NotFound => ProvisioningError::CreateRejected("not found".to_string()),
            DirectoryError::Unavailable(reason) => {
                ProvisioningError::DirectoryUnavailable(format!("creation failed: {}", reason))
            }
        }
    }
}

impl ResponseError for ProvisioningError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProvisioningError::PrivilegeDenied => StatusCode::FORBIDDEN,
            ProvisioningError::DuplicateIdentity(_) => StatusCode::CONFLICT,
            ProvisioningError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            ProvisioningError::DirectoryUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ProvisioningError::CreateRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = serde_json::json!({
            "success": false,
            "error": self.code(),
            "message": self.to_string(),
        });

        if let ProvisioningError::ValidationFailed { field, .. } = self {
            body["field"] = serde_json::Value::String(field.clone());
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ProvisioningError::PrivilegeDenied.to_string(), "not super admin");
        assert_eq!(
            ProvisioningError::DuplicateIdentity("jane@acme.com".to_string()).to_string(),
            "email already exists: jane@acme.com"
        );
        assert_eq!(
            ProvisioningError::CreateRejected("Invalid Input: primary_user_email".to_string()).to_string(),
            "creation failed: Invalid Input: primary_user_email"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ProvisioningError::PrivilegeDenied.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ProvisioningError::DuplicateIdentity(String::new()).status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ProvisioningError::ValidationFailed { field: "title".into(), reason: "title is required".into() }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProvisioningError::DirectoryUnavailable(String::new()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(ProvisioningError::CreateRejected(String::new()).status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_create_failures_keep_prefix() {
        let transient = ProvisioningError::create_failed(DirectoryError::Unavailable("HTTP 503".to_string()));
        assert_eq!(transient.to_string(), "creation failed: HTTP 503");
        assert_eq!(transient.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let rejected = ProvisioningError::create_failed(DirectoryError::Rejected("Entity already exists.".to_string()));
        assert_eq!(rejected.to_string(), "creation failed: Entity already exists.");
    }

    #[test]
    fn test_query_failures() {
        assert_eq!(
            ProvisioningError::query_failed(DirectoryError::Forbidden("Not Authorized".to_string())),
            ProvisioningError::PrivilegeDenied
        );
        assert_eq!(
            ProvisioningError::query_failed(DirectoryError::Unavailable("HTTP 503".to_string())).to_string(),
            "directory unavailable: HTTP 503"
        );
    }

    #[actix_web::test]
    async fn test_validation_body_includes_field() {
        let error = ProvisioningError::ValidationFailed {
            field: "phoneNumber".to_string(),
            reason: "phoneNumber must be '+' followed by 8 to 15 digits".to_string(),
        };

        let response = error.error_response();
        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "validation_failed");
        assert_eq!(body["field"], "phoneNumber");
    }
}
