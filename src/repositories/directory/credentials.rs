//! # 위임 자격 증명 제공자
//!
//! 서비스 계정의 도메인 전체 위임으로 호출자 본인 명의의 Directory API 액세스 토큰을 발급받습니다.
//! 디렉터리가 호출자의 관리자 권한을 직접 판정하므로, 권한 없는 운영자는
//! 토큰 교환 또는 API 호출 단계에서 `Forbidden`을 받습니다.
//!
//! ## 흐름 (RFC 7523 JWT Bearer Grant)
//!
//! ```text
//! 1. 클레임 { iss: 서비스 계정, sub: 호출자 주소, scope, aud: token_uri, iat, exp }
//! 2. RS256 서명 (서비스 계정 개인키)
//! 3. POST token_uri  grant_type=urn:ietf:params:oauth:grant-type:jwt-bearer&assertion=...
//! 4. access_token 캐시 (호출자별, 만료 5분 전까지)
//! ```
//!
//! Directory API가 캐시된 토큰을 401로 거부하면 게이트웨이가 [`DelegatedCredentials::invalidate`]로
//! 해당 호출자 항목을 지우고, 다음 호출에서 새 토큰을 발급받습니다.

use std::collections::HashMap;
use std::sync::RwLock;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, ErrorContext};
use crate::repositories::directory::directory_api::DirectoryError;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// 서비스 계정 어서션 클레임
#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    sub: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_LIFETIME_SECS
}

/// 토큰 엔드포인트 에러 응답 (`{"error": "...", "error_description": "..."}`)
#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: chrono::DateTime<Utc>,
}

impl CachedToken {
    fn is_expired(&self, grace_period: Duration) -> bool {
        Utc::now() + grace_period >= self.expires_at
    }
}

/// 호출자별 액세스 토큰 캐시
///
/// 새 토큰을 넣을 때 만료된 항목을 함께 정리합니다.
struct TokenCache {
    tokens: RwLock<HashMap<String, CachedToken>>,
    grace_period: Duration,
}

impl TokenCache {
    fn new(grace_period: Duration) -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
            grace_period,
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        let tokens = self.tokens.read().ok()?;
        tokens
            .get(key)
            .filter(|token| !token.is_expired(self.grace_period))
            .map(|token| token.access_token.clone())
    }

    fn insert(&self, key: String, token: CachedToken) {
        match self.tokens.write() {
            Ok(mut tokens) => {
                tokens.retain(|_, cached| !cached.is_expired(self.grace_period));
                tokens.insert(key, token);
            }
            Err(e) => log::warn!("토큰 캐시 갱신 실패: {}", e),
        }
    }

    fn invalidate(&self, key: &str) {
        match self.tokens.write() {
            Ok(mut tokens) => {
                tokens.remove(key);
            }
            Err(e) => log::warn!("토큰 캐시 무효화 실패: {}", e),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.tokens.read().map(|tokens| tokens.len()).unwrap_or(0)
    }
}

/// 호출자 명의 액세스 토큰 제공자
pub struct DelegatedCredentials {
    http_client: reqwest::Client,
    service_account_email: String,
    signing_key: EncodingKey,
    token_uri: String,
    scope: String,
    cache: TokenCache,
}

impl DelegatedCredentials {
    /// # Errors
    ///
    /// * `AppError::InternalError` - 개인키 PEM 파싱 실패
    pub fn new(
        http_client: reqwest::Client,
        service_account_email: String,
        private_key_pem: &str,
        token_uri: String,
        scopes: &[&str],
    ) -> Result<Self, AppError> {
        let signing_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .context("서비스 계정 개인키 파싱 실패")?;

        Ok(Self {
            http_client,
            service_account_email,
            signing_key,
            token_uri,
            scope: scopes.join(" "),
            cache: TokenCache::new(Duration::minutes(5)),
        })
    }

    /// 호출자 명의의 액세스 토큰을 반환합니다. 캐시가 유효하면 재사용합니다.
    pub async fn access_token(&self, subject: &str) -> Result<String, DirectoryError> {
        let key = subject.to_ascii_lowercase();

        if let Some(token) = self.cache.get(&key) {
            return Ok(token);
        }

        log::debug!("위임 액세스 토큰 발급 요청: {}", subject);
        let fresh = self.exchange(subject).await?;
        let access_token = fresh.access_token.clone();
        self.cache.insert(key, fresh);

        Ok(access_token)
    }

    /// 호출자의 캐시된 토큰을 버립니다.
    pub fn invalidate(&self, subject: &str) {
        log::debug!("위임 액세스 토큰 무효화: {}", subject);
        self.cache.invalidate(&subject.to_ascii_lowercase());
    }

    fn sign_assertion(&self, subject: &str) -> Result<String, DirectoryError> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.service_account_email,
            sub: subject,
            scope: &self.scope,
            aud: &self.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        encode(&Header::new(Algorithm::RS256), &claims, &self.signing_key)
            .map_err(|e| DirectoryError::Unavailable(format!("어서션 서명 실패: {}", e)))
    }

    async fn exchange(&self, subject: &str) -> Result<CachedToken, DirectoryError> {
        let assertion = self.sign_assertion(subject)?;
        let params = [("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())];

        let response = self.http_client
            .post(&self.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| DirectoryError::Unavailable(format!("토큰 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_token_error(status.as_u16(), &body));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| DirectoryError::Unavailable(format!("토큰 응답 파싱 실패: {}", e)))?;

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: Utc::now() + Duration::seconds(token.expires_in),
        })
    }
}

/// 토큰 엔드포인트 실패 분류
///
/// 위임이 허용되지 않은 주체(`unauthorized_client`, `access_denied`)나
/// 존재하지 않는 주체(`invalid_grant`)는 호출자 권한 문제로 봅니다.
fn classify_token_error(status: u16, body: &str) -> DirectoryError {
    match serde_json::from_str::<TokenErrorResponse>(body) {
        Ok(parsed) => {
            let message = match parsed.error_description {
                Some(description) => format!("{}: {}", parsed.error, description),
                None => parsed.error.clone(),
            };

            match parsed.error.as_str() {
                "unauthorized_client" | "access_denied" | "invalid_grant" => {
                    DirectoryError::Forbidden(message)
                }
                _ => DirectoryError::from_status(status, message),
            }
        }
        Err(_) => DirectoryError::from_status(status, format!("토큰 엔드포인트 응답 {}", status)),
    }
}
