//! # Google Admin SDK Directory API 게이트웨이
//!
//! [`DirectoryApi`]의 HTTPS 구현입니다. 모든 요청은 [`DelegatedCredentials`]로 발급받은
//! 호출자 명의 토큰을 사용합니다.
//!
//! | 연산 | 요청 |
//! |------|------|
//! | `list_org_units` | `GET customer/{id}/orgunits?type=all` |
//! | `get_account` | `GET users/{key}` |
//! | `list_accounts` | `GET users?customer=&maxResults=&pageToken=&query=&fields=` |
//! | `create_account` | `POST users` |

use std::time::Duration;
use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use crate::config::{DirectoryConfig, DIRECTORY_ORGUNIT_SCOPE, DIRECTORY_USER_SCOPE};
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::models::auth::CallerContext;
use crate::domain::models::directory::{
    AccountFields, AccountPage, AccountQuery, CreatedAccount, DirectoryIdentity, NewAccountSpec, OrgUnit,
};
use crate::repositories::directory::credentials::DelegatedCredentials;
use crate::repositories::directory::directory_api::{DirectoryApi, DirectoryError};

/// Directory API 에러 응답
#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleName {
    #[serde(default)]
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleUser {
    primary_email: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default)]
    non_editable_aliases: Vec<String>,
    #[serde(default)]
    suspended: bool,
    #[serde(default)]
    name: Option<GoogleName>,
}

impl From<GoogleUser> for DirectoryIdentity {
    fn from(user: GoogleUser) -> Self {
        let mut aliases = user.aliases;
        aliases.extend(user.non_editable_aliases);

        DirectoryIdentity {
            primary_email: user.primary_email,
            aliases,
            suspended: user.suspended,
            full_name: user.name.and_then(|name| name.full_name),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsersListResponse {
    #[serde(default)]
    users: Vec<GoogleUser>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleOrgUnit {
    #[serde(default)]
    name: String,
    #[serde(default)]
    org_unit_path: String,
    #[serde(default)]
    parent_org_unit_path: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrgUnitsResponse {
    #[serde(default)]
    organization_units: Vec<GoogleOrgUnit>,
}

/// 요청 필드 선택자 (`fields` 파라미터)
fn fields_selector(fields: AccountFields) -> &'static str {
    match fields {
        AccountFields::AddressesOnly => "nextPageToken,users(primaryEmail,aliases,nonEditableAliases)",
        AccountFields::Summary => "nextPageToken,users(primaryEmail,name/fullName,suspended)",
    }
}

/// 비어 있지 않은 다음 페이지 토큰만 유지합니다.
fn continuation(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

/// Google Directory API 게이트웨이
pub struct GoogleDirectory {
    http_client: reqwest::Client,
    base_url: String,
    customer_id: String,
    credentials: DelegatedCredentials,
}

impl GoogleDirectory {
    pub fn new(
        http_client: reqwest::Client,
        base_url: String,
        customer_id: String,
        credentials: DelegatedCredentials,
    ) -> Self {
        Self {
            http_client,
            base_url,
            customer_id,
            credentials,
        }
    }

    /// 환경 변수 설정으로 게이트웨이를 조립합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서비스 계정 설정 누락, 개인키 파싱 실패, HTTP 클라이언트 생성 실패
    pub fn from_env() -> Result<Self, AppError> {
        let http_client = build_http_client(DirectoryConfig::http_timeout())?;

        let credentials = DelegatedCredentials::new(
            http_client.clone(),
            DirectoryConfig::service_account_email()?,
            &DirectoryConfig::service_account_private_key()?,
            DirectoryConfig::token_uri(),
            &[DIRECTORY_USER_SCOPE, DIRECTORY_ORGUNIT_SCOPE],
        )?;

        Ok(Self::new(
            http_client,
            DirectoryConfig::api_base_url(),
            DirectoryConfig::customer_id(),
            credentials,
        ))
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, key: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(key))
    }

    fn org_units_url(&self) -> String {
        format!("{}/customer/{}/orgunits", self.base_url, urlencoding::encode(&self.customer_id))
    }

    /// 호출자 명의 토큰을 붙여 요청하고 응답 본문을 역직렬화합니다.
    ///
    /// 401은 캐시된 토큰이 더 이상 유효하지 않다는 뜻이므로 캐시 항목을 버립니다.
    async fn send<T: DeserializeOwned>(
        &self,
        caller: &CallerContext,
        request: RequestBuilder,
    ) -> Result<T, DirectoryError> {
        let token = self.credentials.access_token(caller.email()).await?;
        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| DirectoryError::Unavailable(format!("Directory API 요청 실패: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| DirectoryError::Unavailable(format!("Directory API 응답 파싱 실패: {}", e)));
        }

        if status == StatusCode::UNAUTHORIZED {
            self.credentials.invalidate(caller.email());
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify_error_body(status.as_u16(), &body))
    }
}

/// 에러 응답 본문(`{"error": {"code", "message"}}`)을 분류합니다.
///
/// 401은 권한 판정이 아니라 토큰 거부이므로 `Unavailable`입니다.
fn classify_error_body(status: u16, body: &str) -> DirectoryError {
    let message = serde_json::from_str::<GoogleErrorEnvelope>(body)
        .ok()
        .map(|envelope| {
            if envelope.error.message.is_empty() {
                format!("HTTP {}", envelope.error.code.unwrap_or(status))
            } else {
                envelope.error.message
            }
        })
        .unwrap_or_else(|| format!("HTTP {}", status));

    match status {
        401 => DirectoryError::Unavailable(format!("액세스 토큰 거부: {}", message)),
        _ => DirectoryError::from_status(status, message),
    }
}

pub(crate) fn build_http_client(timeout: Duration) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("HTTP 클라이언트 생성 실패")
}

#[async_trait]
impl DirectoryApi for GoogleDirectory {
    async fn list_org_units(&self, caller: &CallerContext) -> Result<Vec<OrgUnit>, DirectoryError> {
        let request = self.http_client
            .get(self.org_units_url())
            .query(&[("type", "all")]);

        let response: OrgUnitsResponse = self.send(caller, request).await?;

        Ok(response.organization_units
            .into_iter()
            .map(|unit| OrgUnit {
                name: unit.name,
                org_unit_path: unit.org_unit_path,
                parent_org_unit_path: unit.parent_org_unit_path,
            })
            .collect())
    }

    async fn get_account(
        &self,
        caller: &CallerContext,
        address: &str,
    ) -> Result<Option<DirectoryIdentity>, DirectoryError> {
        let request = self.http_client.get(self.user_url(address));

        match self.send::<GoogleUser>(caller, request).await {
            Ok(user) => Ok(Some(user.into())),
            Err(DirectoryError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list_accounts(
        &self,
        caller: &CallerContext,
        query: &AccountQuery,
    ) -> Result<AccountPage, DirectoryError> {
        let mut params: Vec<(&str, String)> = vec![
            ("customer", self.customer_id.clone()),
            ("maxResults", query.max_results.to_string()),
            ("fields", fields_selector(query.fields).to_string()),
        ];
        if let Some(token) = &query.page_token {
            params.push(("pageToken", token.clone()));
        }
        if let Some(filter) = &query.filter {
            params.push(("query", filter.clone()));
        }

        let request = self.http_client.get(self.users_url()).query(&params);
        let response: UsersListResponse = self.send(caller, request).await?;

        Ok(AccountPage {
            accounts: response.users.into_iter().map(DirectoryIdentity::from).collect(),
            next_page_token: continuation(response.next_page_token),
        })
    }

    async fn create_account(
        &self,
        caller: &CallerContext,
        spec: &NewAccountSpec,
    ) -> Result<CreatedAccount, DirectoryError> {
        let request = self.http_client.post(self.users_url()).json(spec);
        self.send(caller, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_aliases_are_merged() {
        let json = r#"{
            "primaryEmail": "jane.doe@acme.com",
            "aliases": ["jdoe@acme.com"],
            "nonEditableAliases": ["jane.doe@acme.test-google-a.com"],
            "suspended": true,
            "name": {"fullName": "Jane Doe"}
        }"#;

        let user: GoogleUser = serde_json::from_str(json).unwrap();
        let identity = DirectoryIdentity::from(user);

        assert_eq!(identity.aliases.len(), 2);
        assert!(identity.has_alias("JANE.DOE@acme.test-google-a.com"));
        assert!(identity.suspended);
        assert_eq!(identity.full_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_users_list_parsing_without_users() {
        let response: UsersListResponse = serde_json::from_str(r#"{"kind": "admin#directory#users"}"#).unwrap();
        assert!(response.users.is_empty());
        assert!(response.next_page_token.is_none());
    }

    #[test]
    fn test_empty_continuation_token_ends_paging() {
        assert_eq!(continuation(Some("".to_string())), None);
        assert_eq!(continuation(Some("abc".to_string())), Some("abc".to_string()));
        assert_eq!(continuation(None), None);
    }

    #[test]
    fn test_org_units_parsing() {
        let json = r#"{
            "organizationUnits": [
                {"name": "Engineering", "orgUnitPath": "/Engineering", "parentOrgUnitPath": "/"},
                {"name": "Platform", "orgUnitPath": "/Engineering/Platform", "parentOrgUnitPath": "/Engineering"}
            ]
        }"#;

        let response: OrgUnitsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.organization_units.len(), 2);
        assert_eq!(response.organization_units[1].org_unit_path, "/Engineering/Platform");
    }

    #[test]
    fn test_error_body_classification() {
        let body = r#"{"error": {"code": 409, "message": "Entity already exists."}}"#;
        assert_eq!(
            classify_error_body(409, body),
            DirectoryError::Rejected("Entity already exists.".to_string())
        );

        let body = r#"{"error": {"code": 403, "message": "Not Authorized to access this resource/api"}}"#;
        assert!(matches!(classify_error_body(403, body), DirectoryError::Forbidden(_)));

        assert!(matches!(classify_error_body(503, "upstream"), DirectoryError::Unavailable(_)));
        assert_eq!(classify_error_body(404, ""), DirectoryError::NotFound);
    }

    #[test]
    fn test_rejected_access_token_is_not_a_denial() {
        let body = r#"{"error": {"code": 401, "message": "Invalid Credentials"}}"#;
        match classify_error_body(401, body) {
            DirectoryError::Unavailable(msg) => assert!(msg.contains("Invalid Credentials")),
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_fields_selector_requests_aliases_for_scan() {
        assert!(fields_selector(AccountFields::AddressesOnly).contains("nonEditableAliases"));
        assert!(fields_selector(AccountFields::Summary).contains("suspended"));
    }
}
