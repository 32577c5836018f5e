//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (운영자 콘솔)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response (Bearer 토큰)
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - 토큰 검증                       ← 인증
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 계정 생성 파이프라인, 선택 목록      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 디렉터리 게이트웨이             ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `ServiceLocator`에서 서비스를 꺼내고, 토큰의 호출자 정보로
//! `CallerContext`를 만들어 전달하는 일만 합니다.
//!
//! ## 모듈 구성
//!
//! - **`accounts`**: 계정 생성 (`POST /accounts`), 매니저 선택 목록 (`GET /accounts`)
//! - **`org_units`**: OU 드롭다운 (`GET /org-units`)
//! - **`health`**: 헬스체크 (`GET /health`)

pub mod accounts;
pub mod health;
pub mod org_units;
