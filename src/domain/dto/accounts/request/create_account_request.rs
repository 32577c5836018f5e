//! 계정 생성 요청 DTO
//!
//! 운영자가 제출하는 신규 인원 프로필입니다. 모든 문자열은 역직렬화 시
//! 앞뒤 공백이 제거되며, 비어 있는 매니저 필드는 `None`이 됩니다.
//! 필수값/형식/도메인 검증은 파이프라인의 필드 검증 단계에서 순서대로 수행되고,
//! 이 DTO의 `Validate` derive는 길이 상한만 담당합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

/// 신규 계정 프로필
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(max = 60, message = "must be at most 60 characters"))]
    pub first_name: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(max = 60, message = "must be at most 60 characters"))]
    pub last_name: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub title: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub department: String,

    /// 신규 계정의 기본 주소 (호출자 도메인이어야 함)
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub primary_email: String,

    /// 웰컴 메일과 복구 주소로 사용되는 개인 주소
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub secondary_email: String,

    /// `+` 뒤에 8-15자리 숫자
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    pub phone_number: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub organizational_unit_path: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub manager_email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub manager_name: Option<String>,
}

impl CreateAccountRequest {
    /// 표시 이름 ("First Last")
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
