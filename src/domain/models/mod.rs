//! # Domain Models Module
//!
//! 외부 시스템(디렉터리, 인증 토큰)과의 통합 모델과 값 객체를 정의합니다.
//!
//! ```text
//! models/
//! ├── auth/        ← 인증된 호출자, CallerContext
//! ├── token/       ← 호출자 JWT 클레임
//! └── directory/   ← 계정/OU/페이지 모델, 생성 명령, 임시 비밀번호
//! ```
//!
//! 와이어 형식(Google JSON)은 리포지토리 계층에서 변환되며,
//! 서비스 계층은 이 모듈의 타입만 사용합니다.

pub mod auth;
pub mod directory;
pub mod token;
