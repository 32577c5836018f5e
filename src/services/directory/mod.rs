//! 디렉터리 조회 서비스 (OU 목록, 매니저 선택 목록)

pub mod directory_query_service;

pub use directory_query_service::DirectoryQueryService;
