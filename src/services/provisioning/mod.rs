//! # 계정 생성 파이프라인
//!
//! - [`privilege_gate`] - 호출자 관리자 권한 확인
//! - [`uniqueness_checker`] - 기본 주소/별칭 중복 검사
//! - [`field_validator`] - 프로필 필드 검증
//! - [`password_generator`] - 임시 비밀번호 생성
//! - [`welcome_notifier`] - 웰컴 알림 (최선 노력)
//! - [`provisioning_service`] - 위 단계를 순서대로 실행하는 오케스트레이터

pub mod errors;
pub mod field_validator;
pub mod password_generator;
pub mod privilege_gate;
pub mod provisioning_service;
pub mod uniqueness_checker;
pub mod welcome_notifier;

pub use errors::ProvisioningError;
pub use provisioning_service::ProvisioningService;
pub use welcome_notifier::{welcome_notifier_from_env, WelcomeNotifier};
