//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 한 번 조립되어 `Arc`로 [`ServiceLocator`](crate::core::registry::ServiceLocator)에 등록됩니다.
//!
//! # Features
//!
//! - 계정 생성 파이프라인 (권한 확인, 중복 검사, 필드 검증, 비밀번호 생성)
//! - OU/매니저 선택 목록 조회
//! - 운영자 JWT 토큰 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::provisioning::ProvisioningService;
//!
//! let provisioning = ServiceLocator::get::<ProvisioningService>()?;
//! let response = provisioning.create_user(&caller, profile).await?;
//! ```

pub mod auth;
pub mod directory;
pub mod provisioning;
