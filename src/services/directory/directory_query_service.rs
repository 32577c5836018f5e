//! # 디렉터리 조회 서비스
//!
//! 계정 생성 화면이 사용하는 선택 목록을 제공합니다.
//!
//! - [`get_org_units`](DirectoryQueryService::get_org_units) - OU 드롭다운 (경로순)
//! - [`get_all_users`](DirectoryQueryService::get_all_users) - 매니저 선택 목록 (정지 계정 제외, 이름순)

use std::ops::ControlFlow;
use std::sync::Arc;
use crate::config::DirectoryConfig;
use crate::domain::dto::directory::{DirectoryUserOption, OrganizationalUnitOption};
use crate::domain::models::auth::CallerContext;
use crate::domain::models::directory::{AccountFields, AccountQuery, OrgUnit};
use crate::repositories::directory::{account_pages, scan_pages, DirectoryApi, ScanLimits};
use crate::services::provisioning::ProvisioningError;

pub struct DirectoryQueryService {
    directory: Arc<dyn DirectoryApi>,
    page_size: u32,
    limits: ScanLimits,
}

impl DirectoryQueryService {
    pub fn new(directory: Arc<dyn DirectoryApi>, page_size: u32, limits: ScanLimits) -> Self {
        Self {
            directory,
            page_size,
            limits,
        }
    }

    pub fn with_config(directory: Arc<dyn DirectoryApi>) -> Self {
        Self::new(directory, DirectoryConfig::page_size(), ScanLimits::from_config())
    }

    /// 호출자가 볼 수 있는 모든 조직 단위를 경로순으로 돌려줍니다.
    pub async fn get_org_units(
        &self,
        caller: &CallerContext,
    ) -> Result<Vec<OrganizationalUnitOption>, ProvisioningError> {
        let mut units = self.directory
            .list_org_units(caller)
            .await
            .map_err(|e| {
                log::error!("OU 목록 조회 실패 ({}): {}", caller.email(), e);
                ProvisioningError::query_failed(e)
            })?;

        units.sort_by(|a, b| a.org_unit_path.cmp(&b.org_unit_path));
        log::debug!("OU {}건 조회", units.len());

        Ok(units.iter().map(org_unit_option).collect())
    }

    /// 정지되지 않은 모든 계정을 이름순(대소문자 무시)으로 돌려줍니다.
    pub async fn get_all_users(
        &self,
        caller: &CallerContext,
    ) -> Result<Vec<DirectoryUserOption>, ProvisioningError> {
        let pages = account_pages(
            self.directory.clone(),
            caller.clone(),
            AccountQuery::first_page(self.page_size, AccountFields::Summary),
        );

        let mut users = Vec::new();
        let outcome = scan_pages(pages, self.limits, |page| {
            users.extend(
                page.accounts
                    .iter()
                    .filter(|account| !account.suspended)
                    .map(|account| DirectoryUserOption {
                        email: account.primary_email.clone(),
                        name: account.display_name().to_string(),
                    }),
            );
            ControlFlow::Continue(())
        })
        .await
        .map_err(|e| {
            log::error!("사용자 목록 조회 실패 ({}): {}", caller.email(), e);
            ProvisioningError::query_failed(e)
        })?;

        users.sort_by(|a, b| {
            a.name.to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.email.cmp(&b.email))
        });
        log::debug!("사용자 {}건 조회 ({:?})", users.len(), outcome);

        Ok(users)
    }
}

/// 표시 이름은 앞의 "/"를 뗀 경로입니다.
/// 루트 OU처럼 경로가 비면 OU 이름을, 그마저 없으면 "/"를 씁니다.
fn org_unit_option(unit: &OrgUnit) -> OrganizationalUnitOption {
    let stripped = unit.org_unit_path.trim_start_matches('/');

    let display_name = if !stripped.is_empty() {
        stripped.to_string()
    } else {
        if unit.parent_org_unit_path.is_some() {
            log::warn!("루트가 아닌 OU의 경로가 비어 있습니다: {:?}", unit.name);
        }
        let name = unit.name.trim();
        if name.is_empty() { "/".to_string() } else { name.to_string() }
    };

    OrganizationalUnitOption {
        path: unit.org_unit_path.clone(),
        display_name,
    }
}
