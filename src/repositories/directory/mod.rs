//! # 디렉터리 리포지토리
//!
//! 외부 아이덴티티 디렉터리 접근 계층입니다.
//!
//! - [`directory_api`] - `DirectoryApi` trait, `DirectoryError`
//! - [`google_directory`] - Google Admin SDK Directory API 구현 (reqwest)
//! - [`credentials`] - 호출자 명의 위임 토큰 발급 (RS256 JWT Bearer Grant)
//! - [`account_pages`] - 지연 페이지 스트림과 제한 적용 스캔

pub mod account_pages;
pub mod credentials;
pub mod directory_api;
pub mod google_directory;

#[cfg(test)]
pub mod mock_directory;

pub use account_pages::{account_pages, scan_pages, AccountPageStream, ScanLimits, ScanOutcome};
pub use directory_api::{DirectoryApi, DirectoryError};
pub use google_directory::GoogleDirectory;
