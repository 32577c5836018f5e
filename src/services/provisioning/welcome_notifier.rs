//! 웰컴 알림
//!
//! 신규 인원의 개인 주소로 계정 주소와 임시 비밀번호를 전달합니다.
//! 전달은 최선 노력이며, 실패해도 계정 생성은 성공으로 끝납니다.

use async_trait::async_trait;
use serde::Serialize;
use crate::config::{DirectoryConfig, NotificationConfig};
use crate::core::errors::AppError;
use crate::domain::models::directory::TemporaryCredential;
use crate::repositories::directory::google_directory::build_http_client;

/// 웰컴 메시지
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeMessage {
    /// 수신 주소 (secondaryEmail)
    pub recipient: String,
    pub account_email: String,
    pub display_name: String,
    pub temporary_password: TemporaryCredential,
    pub change_password_at_next_login: bool,
}

#[async_trait]
pub trait WelcomeNotifier: Send + Sync {
    async fn send_welcome(&self, message: &WelcomeMessage) -> Result<(), AppError>;
}

/// 설정된 웹훅으로 메시지를 JSON POST합니다.
pub struct WebhookWelcomeNotifier {
    http_client: reqwest::Client,
    webhook_url: String,
}

impl WebhookWelcomeNotifier {
    pub fn new(http_client: reqwest::Client, webhook_url: String) -> Self {
        Self {
            http_client,
            webhook_url,
        }
    }
}

#[async_trait]
impl WelcomeNotifier for WebhookWelcomeNotifier {
    async fn send_welcome(&self, message: &WelcomeMessage) -> Result<(), AppError> {
        let response = self.http_client
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("웰컴 웹훅 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "웰컴 웹훅 응답 오류: {}",
                response.status()
            )));
        }

        Ok(())
    }
}

/// 웹훅이 설정되지 않은 경우. 전달하지 않고 기록만 남깁니다.
pub struct DisabledWelcomeNotifier;

#[async_trait]
impl WelcomeNotifier for DisabledWelcomeNotifier {
    async fn send_welcome(&self, message: &WelcomeMessage) -> Result<(), AppError> {
        log::info!(
            "웰컴 알림 비활성화: {} 계정 안내를 {}에 보내지 않았습니다",
            message.account_email,
            message.recipient
        );
        Ok(())
    }
}

/// 설정에 따라 알림 구현을 선택합니다.
pub fn welcome_notifier_from_env() -> Result<Box<dyn WelcomeNotifier>, AppError> {
    match NotificationConfig::welcome_webhook_url() {
        Some(url) => {
            log::info!("📨 웰컴 웹훅 활성화");
            let http_client = build_http_client(DirectoryConfig::http_timeout())?;
            Ok(Box::new(WebhookWelcomeNotifier::new(http_client, url)))
        }
        None => {
            log::warn!("WELCOME_WEBHOOK_URL 미설정: 웰컴 알림이 비활성화됩니다");
            Ok(Box::new(DisabledWelcomeNotifier))
        }
    }
}
