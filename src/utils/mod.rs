//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 주소 도메인 추출, serde 트리밍 헬퍼
//! - [`display_terminal`] - 부트스트랩 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::email_domain;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! assert_eq!(email_domain("admin@acme.com"), Some("acme.com"));
//! print_boxed_title("DIRECTORY PROVISIONING BACKEND");
//! ```

pub mod string_utils;
pub mod display_terminal;
