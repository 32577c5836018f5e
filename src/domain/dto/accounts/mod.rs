//! 계정 생성 API 계약

pub mod request;
pub mod response;
