//! 디렉터리 도메인 모델
//!
//! - [`directory_identity`] - 계정, 조직 단위, 페이지 조회 모델
//! - [`account_spec`] - 계정 생성 명령과 생성 결과
//! - [`temporary_credential`] - 마스킹되는 임시 비밀번호

pub mod account_spec;
pub mod directory_identity;
pub mod temporary_credential;

pub use account_spec::*;
pub use directory_identity::*;
pub use temporary_credential::TemporaryCredential;
