//! 디렉터리 조회 응답 DTO (OU 드롭다운, 매니저 선택 목록)
use serde::{Deserialize, Serialize};

/// 조직 단위 선택 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationalUnitOption {
    pub path: String,
    pub display_name: String,
}

/// 매니저 선택 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUserOption {
    pub email: String,
    pub name: String,
}
