//! 테스트용 인메모리 디렉터리
//!
//! 페이지 단위로 계정을 스크립트하고, 호출 횟수와 생성 요청을 기록합니다.
//! 페이지 토큰은 `page-{index}` 형식입니다.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use crate::domain::models::auth::CallerContext;
use crate::domain::models::directory::{
    AccountPage, AccountQuery, CreatedAccount, DirectoryIdentity, NewAccountSpec, OrgUnit,
};
use crate::repositories::directory::directory_api::{DirectoryApi, DirectoryError};

pub fn identity(primary: &str, aliases: &[&str]) -> DirectoryIdentity {
    DirectoryIdentity {
        primary_email: primary.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        suspended: false,
        full_name: None,
    }
}

pub fn named(primary: &str, full_name: &str, suspended: bool) -> DirectoryIdentity {
    DirectoryIdentity {
        primary_email: primary.to_string(),
        aliases: Vec::new(),
        suspended,
        full_name: Some(full_name.to_string()),
    }
}

pub fn org_unit(name: &str, path: &str) -> OrgUnit {
    OrgUnit {
        name: name.to_string(),
        org_unit_path: path.to_string(),
        parent_org_unit_path: None,
    }
}

#[derive(Default)]
pub struct MockDirectory {
    pages: Vec<Vec<DirectoryIdentity>>,
    org_units: Vec<OrgUnit>,
    caller_error: Mutex<Option<DirectoryError>>,
    page_failure: Mutex<Option<(usize, DirectoryError)>>,
    lookup_failure: Mutex<Option<DirectoryError>>,
    create_failure: Mutex<Option<DirectoryError>>,
    page_delay: Mutex<Option<Duration>>,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
    queries: Mutex<Vec<AccountQuery>>,
    created: Mutex<Vec<NewAccountSpec>>,
}

impl MockDirectory {
    pub fn with_pages(pages: Vec<Vec<DirectoryIdentity>>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    pub fn with_org_units(org_units: Vec<OrgUnit>) -> Self {
        Self {
            org_units,
            ..Default::default()
        }
    }

    pub fn and_org_units(mut self, org_units: Vec<OrgUnit>) -> Self {
        self.org_units = org_units;
        self
    }

    /// 모든 연산이 이 에러로 실패합니다 (권한 없는 호출자).
    pub fn fail_every_call(&self, error: DirectoryError) {
        *self.caller_error.lock().unwrap() = Some(error);
    }

    pub fn fail_page(&self, index: usize, error: DirectoryError) {
        *self.page_failure.lock().unwrap() = Some((index, error));
    }

    pub fn fail_lookup(&self, error: DirectoryError) {
        *self.lookup_failure.lock().unwrap() = Some(error);
    }

    pub fn fail_create(&self, error: DirectoryError) {
        *self.create_failure.lock().unwrap() = Some(error);
    }

    pub fn set_page_delay(&self, delay: Duration) {
        *self.page_delay.lock().unwrap() = Some(delay);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<AccountQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<NewAccountSpec> {
        self.created.lock().unwrap().clone()
    }

    fn caller_error(&self) -> Result<(), DirectoryError> {
        match self.caller_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn page_index(token: Option<&str>) -> usize {
        token
            .and_then(|t| t.strip_prefix("page-"))
            .and_then(|i| i.parse().ok())
            .unwrap_or(0)
    }
}

#[async_trait]
impl DirectoryApi for MockDirectory {
    async fn list_org_units(&self, _caller: &CallerContext) -> Result<Vec<OrgUnit>, DirectoryError> {
        self.caller_error()?;
        Ok(self.org_units.clone())
    }

    async fn get_account(
        &self,
        _caller: &CallerContext,
        address: &str,
    ) -> Result<Option<DirectoryIdentity>, DirectoryError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.caller_error()?;

        if let Some(error) = self.lookup_failure.lock().unwrap().clone() {
            return Err(error);
        }

        // 실제 디렉터리처럼 별칭으로 조회해도 소유 계정을 돌려줍니다.
        Ok(self.pages
            .iter()
            .flatten()
            .find(|account| account.claims_address(address))
            .cloned())
    }

    async fn list_accounts(
        &self,
        _caller: &CallerContext,
        query: &AccountQuery,
    ) -> Result<AccountPage, DirectoryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());
        self.caller_error()?;

        let delay = *self.page_delay.lock().unwrap();
        if let Some(delay) = delay {
            actix_web::rt::time::sleep(delay).await;
        }

        let index = Self::page_index(query.page_token.as_deref());

        if let Some((failing, error)) = self.page_failure.lock().unwrap().clone() {
            if failing == index {
                return Err(error);
            }
        }

        let accounts = self.pages.get(index).cloned().unwrap_or_default();
        let next_page_token = (index + 1 < self.pages.len()).then(|| format!("page-{}", index + 1));

        Ok(AccountPage { accounts, next_page_token })
    }

    async fn create_account(
        &self,
        _caller: &CallerContext,
        spec: &NewAccountSpec,
    ) -> Result<CreatedAccount, DirectoryError> {
        self.caller_error()?;

        if let Some(error) = self.create_failure.lock().unwrap().clone() {
            return Err(error);
        }

        self.created.lock().unwrap().push(spec.clone());
        Ok(CreatedAccount {
            id: Some(format!("uid-{}", self.created.lock().unwrap().len())),
            primary_email: spec.primary_email.to_ascii_lowercase(),
        })
    }
}
