//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 정적 구조체로 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, CORS 설정
//! - [`auth_config`] - 호출자 JWT 검증 설정
//! - [`directory_config`] - Google Directory 연동, 스캔 제한, 웰컴 알림 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보(JWT 시크릿, 서비스 계정 키)는 환경 변수로만 제공
//! - 필수값 누락은 `Result`로 보고하여 부트스트랩에서 즉시 종료
//! - 선택값은 파싱 실패 시 기본값 사용
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DirectoryConfig, ServerConfig};
//!
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! let page_size = DirectoryConfig::page_size();
//! let deadline = DirectoryConfig::scan_timeout();
//! ```
//!
//! ## 프로필
//!
//! `PROFILE` 환경 변수(`dev`, `prod`)에 따라 `.env.dev` 또는 `.env.prod` 파일이
//! `main.rs`에서 로드됩니다.

pub mod data_config;
pub mod auth_config;
pub mod directory_config;

pub use data_config::*;
pub use auth_config::*;
pub use directory_config::*;
