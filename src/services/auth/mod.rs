//! 인증 서비스 모듈
//!
//! 운영자 Bearer 토큰(HS256) 검증을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = ServiceLocator::get::<TokenService>()?;
//! let claims = token_service.verify_token(token)?;
//! ```

pub mod token_service;

pub use token_service::TokenService;
