//! 디렉터리 계정 프로비저닝 백엔드
//!
//! 관리자가 Google Workspace 디렉터리에 신규 인원의 계정을 만드는 서비스입니다.
//! 계정 생성 전에 호출자 권한, 주소 중복(기본 주소와 별칭), 프로필 필드를 확인하고
//! 임시 비밀번호를 생성하여 디렉터리에 생성 요청을 보냅니다.
//!
//! # Features
//!
//! - **계정 생성**: 권한 확인 → 중복 검사 → 필드 검증 → 비밀번호 생성 → 생성 요청
//! - **선택 목록**: OU 드롭다운, 매니저 선택 목록
//! - **호출자 위임**: 서비스 계정이 호출자 명의로 디렉터리를 호출 (JWT Bearer Grant)
//! - **JWT 인증**: 운영자 Bearer 토큰(HS256) 검증
//! - **웰컴 알림**: 최선 노력 웹훅 전달
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/api/v1)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, CallerContext 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 계정 생성 파이프라인, 선택 목록
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← DirectoryApi (Google Admin SDK)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use directory_provisioning_backend::core::registry::ServiceLocator;
//! use directory_provisioning_backend::services::provisioning::ProvisioningService;
//!
//! let provisioning = ServiceLocator::get::<ProvisioningService>()?;
//! let response = provisioning.create_user(&caller, profile).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
