//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 HS256 검증
//! - 호출자 정보(`AuthenticatedUser`)를 request extension에 저장
//! - 실패 시 401 `{"success": false, "error": "authentication_required"}`
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1")
//!             .wrap(AuthMiddleware::required())
//!             .route("/accounts", web::post().to(create_account))
//!     )
//!     .route("/health", web::get().to(health_check))
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
