//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, API 계약(DTO)과 도메인 모델을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs         - 요청/응답 데이터 전송 객체 (HTTP 경계)
//! └── Models       - 호출자, 디렉터리 계정, 생성 명령 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories - Directory API)
//! ```
//!
//! ## 계정 생성 흐름
//!
//! ```rust,ignore
//! use crate::domain::dto::accounts::request::CreateAccountRequest;
//!
//! // 1. DTO로 입력 받기 (앞뒤 공백은 역직렬화 시 제거)
//! let request: CreateAccountRequest = payload.into_inner();
//!
//! // 2. 파이프라인 실행 (권한 → 중복 → 검증 → 비밀번호 → 생성)
//! let response = provisioning_service.create_user(&caller, request).await?;
//! ```

pub mod dto;
pub mod models;
