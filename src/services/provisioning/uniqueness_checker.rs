//! 아이덴티티 중복 검사기
//!
//! 후보 주소가 기존 계정의 기본 주소 또는 별칭과 충돌하는지 확인합니다.
//!
//! 1. 기본 주소 직접 조회. 돌려받은 기본 주소가 후보와 같으면 충돌.
//!    조회가 거부(잘못된 키, 다른 도메인)되면 일치 없음으로 보고 2로 진행
//! 2. 전체 계정을 페이지 단위로 스캔하며 별칭(과 기본 주소) 비교
//! 3. 일치하는 즉시 충돌 보고, 모든 페이지를 본 뒤에만 "충돌 없음" 보고
//!
//! 스캔이 끝나지 못하면(페이지 에러, 제한 시간, 최대 페이지) 에러를 돌려주며
//! "충돌 없음"으로 취급하지 않습니다.

use std::ops::ControlFlow;
use std::sync::Arc;
use crate::domain::models::auth::CallerContext;
use crate::domain::models::directory::{AccountFields, AccountQuery};
use crate::repositories::directory::{
    account_pages, scan_pages, DirectoryApi, DirectoryError, ScanLimits, ScanOutcome,
};

pub struct UniquenessChecker {
    directory: Arc<dyn DirectoryApi>,
    page_size: u32,
    limits: ScanLimits,
}

impl UniquenessChecker {
    pub fn new(directory: Arc<dyn DirectoryApi>, page_size: u32, limits: ScanLimits) -> Self {
        Self {
            directory,
            page_size,
            limits,
        }
    }

    /// 후보 주소가 어디에든 이미 존재하는지 확인합니다.
    ///
    /// 비어 있는 후보는 충돌할 수 없으므로 조회 없이 `false`입니다.
    pub async fn email_exists_anywhere(
        &self,
        caller: &CallerContext,
        candidate: &str,
    ) -> Result<bool, DirectoryError> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return Ok(false);
        }

        match self.directory.get_account(caller, candidate).await {
            Ok(Some(account)) if account.has_primary(candidate) => {
                log::debug!("기본 주소 충돌: {}", candidate);
                return Ok(true);
            }
            Ok(_) | Err(DirectoryError::NotFound) => {}
            // 형식이 잘못된 키나 다른 도메인 키는 조회가 거부될 뿐, 충돌 판정은 스캔이 합니다
            Err(e @ (DirectoryError::Rejected(_) | DirectoryError::Forbidden(_))) => {
                log::debug!("기본 주소 조회 거부, 별칭 스캔으로 진행: {} ({})", candidate, e);
            }
            Err(e @ DirectoryError::Unavailable(_)) => return Err(e),
        }

        let pages = account_pages(
            self.directory.clone(),
            caller.clone(),
            AccountQuery::first_page(self.page_size, AccountFields::AddressesOnly),
        );

        let outcome = scan_pages(pages, self.limits, |page| {
            if page.accounts.iter().any(|account| account.claims_address(candidate)) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await?;

        match outcome {
            ScanOutcome::Stopped { pages } => {
                log::debug!("별칭 충돌: {} ({} 페이지 스캔)", candidate, pages);
                Ok(true)
            }
            ScanOutcome::Exhausted { pages } => {
                log::debug!("충돌 없음: {} ({} 페이지 스캔)", candidate, pages);
                Ok(false)
            }
        }
    }
}
