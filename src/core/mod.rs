//! # Core Framework Module
//!
//! 프로비저닝 백엔드의 핵심 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 서비스 레지스트리
//! - **ServiceLocator**: 부트스트랩에서 조립한 서비스를 타입별로 보관
//! - **Arc 공유**: 핸들러는 `Arc<T>` 복제본만 받아 사용
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현
//! - **ErrorContext**: 외부 라이브러리 에러에 컨텍스트 부여
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! // main.rs
//! ServiceLocator::set(Arc::new(provisioning_service));
//!
//! // handler
//! let service = ServiceLocator::get::<ProvisioningService>()?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
