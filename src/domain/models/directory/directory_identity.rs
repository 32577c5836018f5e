//! 디렉터리 조회 모델
//!
//! 게이트웨이 구현과 무관한 읽기 전용 도메인 모델입니다.
//! Google 응답의 와이어 형식은 게이트웨이 구현 내부에서 이 타입으로 변환됩니다.

/// 디렉터리에 존재하는 계정 한 건
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryIdentity {
    pub primary_email: String,
    /// 편집 가능한 별칭과 편집 불가 별칭을 합친 목록
    pub aliases: Vec<String>,
    pub suspended: bool,
    pub full_name: Option<String>,
}

impl DirectoryIdentity {
    /// 후보 주소가 기본 주소와 대소문자 무시 비교로 같은지 확인합니다.
    pub fn has_primary(&self, candidate: &str) -> bool {
        self.primary_email.trim().eq_ignore_ascii_case(candidate)
    }

    /// 후보 주소가 별칭 중 하나와 대소문자 무시 비교로 같은지 확인합니다.
    pub fn has_alias(&self, candidate: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.trim().eq_ignore_ascii_case(candidate))
    }

    /// 기본 주소 또는 별칭 중 하나라도 일치하는지 확인합니다.
    pub fn claims_address(&self, candidate: &str) -> bool {
        self.has_primary(candidate) || self.has_alias(candidate)
    }

    /// 표시 이름. 전체 이름이 없으면 기본 주소를 사용합니다.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.primary_email)
    }
}

/// 조직 단위 (OU)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgUnit {
    pub name: String,
    pub org_unit_path: String,
    pub parent_org_unit_path: Option<String>,
}

/// 계정 목록 조회 시 요청할 필드 집합
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountFields {
    /// 기본 주소와 별칭만 (중복 검사 스캔)
    AddressesOnly,
    /// 주소, 이름, 정지 여부 (매니저 선택 목록)
    Summary,
}

/// 계정 목록 한 페이지 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountQuery {
    pub page_token: Option<String>,
    pub max_results: u32,
    pub filter: Option<String>,
    pub fields: AccountFields,
}

impl AccountQuery {
    pub fn first_page(max_results: u32, fields: AccountFields) -> Self {
        Self {
            page_token: None,
            max_results,
            filter: None,
            fields,
        }
    }

    /// 같은 조건으로 다음 페이지를 요청합니다.
    pub fn with_page_token(&self, token: impl Into<String>) -> Self {
        Self {
            page_token: Some(token.into()),
            ..self.clone()
        }
    }
}

/// 계정 목록 한 페이지 응답
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountPage {
    pub accounts: Vec<DirectoryIdentity>,
    /// 다음 페이지 토큰. `None`이면 마지막 페이지입니다.
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> DirectoryIdentity {
        DirectoryIdentity {
            primary_email: "jane.doe@acme.com".to_string(),
            aliases: vec!["jdoe@acme.com".to_string(), "J.Doe@Acme.com".to_string()],
            suspended: false,
            full_name: Some("Jane Doe".to_string()),
        }
    }

    #[test]
    fn test_address_matching_ignores_case() {
        let identity = identity();
        assert!(identity.has_primary("JANE.DOE@acme.com"));
        assert!(identity.has_alias("j.doe@acme.com"));
        assert!(identity.claims_address("JDOE@ACME.COM"));
        assert!(!identity.claims_address("john@acme.com"));
    }

    #[test]
    fn test_display_name_falls_back_to_address() {
        let mut identity = identity();
        assert_eq!(identity.display_name(), "Jane Doe");

        identity.full_name = Some("  ".to_string());
        assert_eq!(identity.display_name(), "jane.doe@acme.com");
    }

    #[test]
    fn test_with_page_token_keeps_query_shape() {
        let first = AccountQuery::first_page(100, AccountFields::AddressesOnly);
        let next = first.with_page_token("tok-2");

        assert_eq!(next.page_token.as_deref(), Some("tok-2"));
        assert_eq!(next.max_results, 100);
        assert_eq!(next.fields, AccountFields::AddressesOnly);
    }
}
