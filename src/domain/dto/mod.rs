//! # Data Transfer Objects
//!
//! HTTP 경계에서 사용하는 요청/응답 객체입니다.
//!
//! ```text
//! dto/
//! ├── accounts/
//! │   ├── request/     - 계정 생성 프로필
//! │   └── response/    - 생성된 계정 요약
//! └── directory/       - OU/매니저 선택 목록 항목
//! ```

pub mod accounts;
pub mod directory;
