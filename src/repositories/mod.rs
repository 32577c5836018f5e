//! # Repository Layer
//!
//! 외부 시스템 접근 계층입니다. 이 서비스는 자체 저장소가 없으며,
//! 유일한 공유 자원은 외부 디렉터리입니다.

pub mod directory;
