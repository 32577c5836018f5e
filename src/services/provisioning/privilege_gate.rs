//! 관리자 권한 게이트
//!
//! 최소한의 권한 필요 조회(계정 1건 목록)로 호출자의 관리자 권한을 확인합니다.
//! 판정이 불확실하면 거부합니다.

use std::sync::Arc;
use crate::domain::models::auth::CallerContext;
use crate::domain::models::directory::{AccountFields, AccountQuery};
use crate::repositories::directory::{DirectoryApi, DirectoryError};

/// 권한 확인 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivilegeCheck {
    Granted,
    /// 디렉터리가 호출자를 거부함
    Denied(String),
    /// 전송 실패, 일시 장애 등 판정 불가. 거부로 취급합니다.
    ProbeError(String),
}

impl PrivilegeCheck {
    pub fn is_granted(&self) -> bool {
        matches!(self, PrivilegeCheck::Granted)
    }
}

pub struct PrivilegeGate {
    directory: Arc<dyn DirectoryApi>,
}

impl PrivilegeGate {
    pub fn new(directory: Arc<dyn DirectoryApi>) -> Self {
        Self { directory }
    }

    /// 권한 프로브를 실행합니다. 결과는 호출자가 로그와 함께 해석합니다.
    pub async fn check(&self, caller: &CallerContext) -> PrivilegeCheck {
        let probe = AccountQuery::first_page(1, AccountFields::AddressesOnly);

        match self.directory.list_accounts(caller, &probe).await {
            Ok(_) => PrivilegeCheck::Granted,
            Err(DirectoryError::Forbidden(reason)) => PrivilegeCheck::Denied(reason),
            Err(other) => PrivilegeCheck::ProbeError(other.to_string()),
        }
    }

    /// 관리자 권한 여부
    pub async fn is_super_admin(&self, caller: &CallerContext) -> bool {
        self.check(caller).await.is_granted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::directory::mock_directory::{identity, MockDirectory};

    fn caller() -> CallerContext {
        CallerContext::new("admin@acme.com").unwrap()
    }

    #[actix_web::test]
    async fn test_successful_probe_grants() {
        let directory = Arc::new(MockDirectory::with_pages(vec![vec![identity("a@acme.com", &[])]]));
        let gate = PrivilegeGate::new(directory.clone());

        assert_eq!(gate.check(&caller()).await, PrivilegeCheck::Granted);
        assert!(gate.is_super_admin(&caller()).await);

        let probe = &directory.queries()[0];
        assert_eq!(probe.max_results, 1);
        assert!(probe.page_token.is_none());
    }

    #[actix_web::test]
    async fn test_forbidden_probe_is_denied() {
        let directory = Arc::new(MockDirectory::default());
        directory.fail_every_call(DirectoryError::Forbidden("Not Authorized to access this resource/api".to_string()));
        let gate = PrivilegeGate::new(directory);

        assert!(matches!(gate.check(&caller()).await, PrivilegeCheck::Denied(_)));
        assert!(!gate.is_super_admin(&caller()).await);
    }

    #[actix_web::test]
    async fn test_probe_failure_fails_closed() {
        let directory = Arc::new(MockDirectory::default());
        directory.fail_every_call(DirectoryError::Unavailable("connection reset".to_string()));
        let gate = PrivilegeGate::new(directory);

        let check = gate.check(&caller()).await;
        assert!(matches!(check, PrivilegeCheck::ProbeError(ref reason) if reason.contains("connection reset")));
        assert!(!check.is_granted());
    }
}
