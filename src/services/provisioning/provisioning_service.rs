//! # 계정 생성 오케스트레이터
//!
//! ```text
//! START → PRIVILEGE_CHECK → UNIQUENESS_CHECK → FIELD_VALIDATION → PASSWORD_GEN
//!       → DIRECTORY_CREATE → (WELCOME_NOTIFY) → DONE
//!                 └──────── 어느 단계든 실패 시 FAILED ────────┘
//! ```
//!
//! 프로필은 권한 확인, 중복 검사, 필드 검증을 이 순서로 모두 통과해야만
//! 디렉터리 생성 요청에 전달됩니다. 생성 요청은 재시도하지 않습니다.
//! 모든 로그 라인은 시도 ID(uuid v4)를 포함하며 임시 비밀번호는 기록하지 않습니다.

use std::sync::Arc;
use uuid::Uuid;
use crate::config::DirectoryConfig;
use crate::domain::dto::accounts::request::CreateAccountRequest;
use crate::domain::dto::accounts::response::{CreateAccountResponse, ManagerReference, ProvisionedAccount};
use crate::domain::models::auth::CallerContext;
use crate::domain::models::directory::{
    EmailEntry, NewAccountSpec, OrganizationEntry, PersonName, PhoneEntry, RelationEntry, TemporaryCredential,
};
use crate::repositories::directory::{DirectoryApi, ScanLimits};
use crate::services::provisioning::errors::ProvisioningError;
use crate::services::provisioning::field_validator::validate_profile;
use crate::services::provisioning::password_generator::PasswordGenerator;
use crate::services::provisioning::privilege_gate::{PrivilegeCheck, PrivilegeGate};
use crate::services::provisioning::uniqueness_checker::UniquenessChecker;
use crate::services::provisioning::welcome_notifier::{WelcomeMessage, WelcomeNotifier};

pub struct ProvisioningService {
    directory: Arc<dyn DirectoryApi>,
    privilege_gate: PrivilegeGate,
    uniqueness_checker: UniquenessChecker,
    password_generator: PasswordGenerator,
    notifier: Box<dyn WelcomeNotifier>,
}

impl ProvisioningService {
    pub fn new(
        directory: Arc<dyn DirectoryApi>,
        notifier: Box<dyn WelcomeNotifier>,
        page_size: u32,
        limits: ScanLimits,
    ) -> Self {
        Self {
            privilege_gate: PrivilegeGate::new(directory.clone()),
            uniqueness_checker: UniquenessChecker::new(directory.clone(), page_size, limits),
            password_generator: PasswordGenerator::new(),
            directory,
            notifier,
        }
    }

    /// 환경 설정의 페이지 크기와 스캔 제한으로 서비스를 조립합니다.
    pub fn with_config(directory: Arc<dyn DirectoryApi>, notifier: Box<dyn WelcomeNotifier>) -> Self {
        Self::new(directory, notifier, DirectoryConfig::page_size(), ScanLimits::from_config())
    }

    /// 신규 계정을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `PrivilegeDenied` - 관리자 권한 확인 실패 (판정 불가 포함)
    /// * `DuplicateIdentity` - 기본 주소 또는 별칭과 충돌
    /// * `DirectoryUnavailable` - 중복 검사를 끝내지 못했거나 생성 요청이 일시 장애로 실패
    /// * `ValidationFailed` - 필드 검증 실패
    /// * `CreateRejected` - 디렉터리가 생성 요청을 거부
    pub async fn create_user(
        &self,
        caller: &CallerContext,
        profile: CreateAccountRequest,
    ) -> Result<CreateAccountResponse, ProvisioningError> {
        let attempt_id = Uuid::new_v4();
        log::info!(
            "[{}] 계정 생성 시작: {} (호출자 {})",
            attempt_id, profile.primary_email, caller.email()
        );

        match self.privilege_gate.check(caller).await {
            PrivilegeCheck::Granted => {
                log::debug!("[{}] 권한 확인 통과", attempt_id);
            }
            PrivilegeCheck::Denied(reason) => {
                log::warn!("[{}] 권한 거부: {} ({})", attempt_id, caller.email(), reason);
                return Err(ProvisioningError::PrivilegeDenied);
            }
            PrivilegeCheck::ProbeError(reason) => {
                log::error!("[{}] 권한 프로브 실패, 거부 처리: {}", attempt_id, reason);
                return Err(ProvisioningError::PrivilegeDenied);
            }
        }

        let exists = self.uniqueness_checker
            .email_exists_anywhere(caller, &profile.primary_email)
            .await
            .map_err(|e| {
                log::error!("[{}] 중복 검사 실패: {}", attempt_id, e);
                ProvisioningError::scan_failed(e)
            })?;
        if exists {
            log::warn!("[{}] 중복 주소: {}", attempt_id, profile.primary_email);
            return Err(ProvisioningError::DuplicateIdentity(profile.primary_email));
        }

        if let Err(violation) = validate_profile(&profile, caller.domain()) {
            log::warn!("[{}] 필드 검증 실패: {}", attempt_id, violation);
            return Err(ProvisioningError::ValidationFailed {
                field: violation.field.to_string(),
                reason: violation.message,
            });
        }

        let password = self.password_generator.generate();
        let spec = build_account_spec(&profile, password.clone());

        let created = self.directory
            .create_account(caller, &spec)
            .await
            .map_err(|e| {
                log::error!("[{}] 디렉터리 생성 실패: {}", attempt_id, e);
                ProvisioningError::create_failed(e)
            })?;
        log::info!("[{}] ✅ 계정 생성 완료: {}", attempt_id, created.primary_email);

        let welcome = WelcomeMessage {
            recipient: profile.secondary_email.clone(),
            account_email: created.primary_email.clone(),
            display_name: profile.display_name(),
            temporary_password: password,
            change_password_at_next_login: true,
        };
        if let Err(e) = self.notifier.send_welcome(&welcome).await {
            log::warn!("[{}] 웰컴 알림 실패 (계정 생성은 유지): {}", attempt_id, e);
        }

        Ok(CreateAccountResponse::created(provisioned_account(&profile, created.primary_email)))
    }
}

fn build_account_spec(profile: &CreateAccountRequest, password: TemporaryCredential) -> NewAccountSpec {
    let relations = profile.manager_email
        .iter()
        .map(|manager| RelationEntry {
            value: manager.clone(),
            kind: "manager".to_string(),
        })
        .collect();

    NewAccountSpec {
        name: PersonName {
            given_name: profile.first_name.clone(),
            family_name: profile.last_name.clone(),
        },
        primary_email: profile.primary_email.clone(),
        password,
        change_password_at_next_login: true,
        org_unit_path: profile.organizational_unit_path.clone(),
        phones: vec![PhoneEntry {
            value: profile.phone_number.clone(),
            kind: "work".to_string(),
        }],
        organizations: vec![OrganizationEntry {
            title: profile.title.clone(),
            department: profile.department.clone(),
            primary: true,
        }],
        emails: vec![EmailEntry {
            address: profile.secondary_email.clone(),
            kind: "home".to_string(),
        }],
        recovery_email: profile.secondary_email.clone(),
        relations,
    }
}

fn provisioned_account(profile: &CreateAccountRequest, canonical_email: String) -> ProvisionedAccount {
    ProvisionedAccount {
        email: canonical_email,
        name: profile.display_name(),
        department: profile.department.clone(),
        title: profile.title.clone(),
        manager: profile.manager_email.as_ref().map(|email| ManagerReference {
            email: email.clone(),
            name: profile.manager_name.clone(),
        }),
    }
}
