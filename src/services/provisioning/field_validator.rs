//! 프로필 필드 검증기
//!
//! I/O 없는 순수 함수입니다. 규칙은 아래 순서로 적용되며 첫 실패에서 멈춥니다.
//!
//! 1. 필수값: firstName, lastName, primaryEmail, title, department,
//!    secondaryEmail, phoneNumber, organizationalUnitPath
//! 2. 이메일 형식: primaryEmail, secondaryEmail 순
//! 3. primaryEmail 도메인 = 호출자 디렉터리 도메인 (ASCII 대소문자 무시, 정확히 일치)
//! 4. 전화번호: `+` 뒤 8-15자리 숫자
//! 5. managerEmail 형식 (있는 경우)
//! 6. 길이 상한 (`validator` derive), 프로필 필드 순서로 첫 위반 보고

use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;
use crate::domain::dto::accounts::request::CreateAccountRequest;
use crate::utils::string_utils::{email_domain, is_valid_string};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[0-9]{8,15}$").expect("valid phone regex")
});

/// 검증 실패 (필드 이름, 사유)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 프로필 필드 순서 (API 이름, 구조체 필드 이름)
const PROFILE_ORDER: [(&str, &str); 10] = [
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("title", "title"),
    ("department", "department"),
    ("primaryEmail", "primary_email"),
    ("secondaryEmail", "secondary_email"),
    ("phoneNumber", "phone_number"),
    ("organizationalUnitPath", "organizational_unit_path"),
    ("managerEmail", "manager_email"),
    ("managerName", "manager_name"),
];

pub fn is_valid_email(address: &str) -> bool {
    EMAIL_PATTERN.is_match(address)
}

pub fn is_valid_phone(number: &str) -> bool {
    PHONE_PATTERN.is_match(number)
}

/// 프로필을 검증합니다.
///
/// `caller_domain`은 [`CallerContext::domain`](crate::domain::models::auth::CallerContext::domain)입니다.
pub fn validate_profile(profile: &CreateAccountRequest, caller_domain: &str) -> Result<(), FieldViolation> {
    let required: [(&'static str, &str); 8] = [
        ("firstName", profile.first_name.as_str()),
        ("lastName", profile.last_name.as_str()),
        ("primaryEmail", profile.primary_email.as_str()),
        ("title", profile.title.as_str()),
        ("department", profile.department.as_str()),
        ("secondaryEmail", profile.secondary_email.as_str()),
        ("phoneNumber", profile.phone_number.as_str()),
        ("organizationalUnitPath", profile.organizational_unit_path.as_str()),
    ];

    for (field, value) in required {
        if !is_valid_string(value) {
            return Err(FieldViolation::new(field, format!("{} is required", field)));
        }
    }

    for (field, value) in [
        ("primaryEmail", profile.primary_email.as_str()),
        ("secondaryEmail", profile.secondary_email.as_str()),
    ] {
        if !is_valid_email(value) {
            return Err(FieldViolation::new(field, format!("{} is not a valid email address", field)));
        }
    }

    let domain_matches = email_domain(&profile.primary_email)
        .is_some_and(|domain| domain.eq_ignore_ascii_case(caller_domain));
    if !domain_matches {
        return Err(FieldViolation::new(
            "primaryEmail",
            format!("primaryEmail must belong to the {} domain", caller_domain),
        ));
    }

    if !is_valid_phone(&profile.phone_number) {
        return Err(FieldViolation::new(
            "phoneNumber",
            "phoneNumber must be '+' followed by 8 to 15 digits",
        ));
    }

    if let Some(manager_email) = profile.manager_email.as_deref() {
        if !is_valid_email(manager_email) {
            return Err(FieldViolation::new("managerEmail", "managerEmail is not a valid email address"));
        }
    }

    validate_lengths(profile)
}

fn validate_lengths(profile: &CreateAccountRequest) -> Result<(), FieldViolation> {
    let errors = match profile.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };
    let field_errors = errors.field_errors();

    for (api_name, struct_name) in PROFILE_ORDER {
        let failures = field_errors
            .get(struct_name)
            .or_else(|| field_errors.get(api_name));

        if let Some(first) = failures.and_then(|list| list.first()) {
            let reason = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            return Err(FieldViolation::new(api_name, format!("{} {}", api_name, reason)));
        }
    }

    Err(FieldViolation::new("profile", errors.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALLER_DOMAIN: &str = "acme.com";

    fn valid_profile() -> CreateAccountRequest {
        CreateAccountRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            title: "Engineer".to_string(),
            department: "R&D".to_string(),
            primary_email: "jane.doe@acme.com".to_string(),
            secondary_email: "jane@gmail.com".to_string(),
            phone_number: "+14165551234".to_string(),
            organizational_unit_path: "/Engineering".to_string(),
            manager_email: None,
            manager_name: None,
        }
    }

    fn violation(profile: &CreateAccountRequest) -> FieldViolation {
        validate_profile(profile, CALLER_DOMAIN).unwrap_err()
    }

    #[test]
    fn test_accepts_well_formed_profile() {
        assert_eq!(validate_profile(&valid_profile(), CALLER_DOMAIN), Ok(()));
    }

    #[test]
    fn test_required_fields_reported_in_order() {
        let mut profile = valid_profile();
        profile.title = "".to_string();
        profile.department = "   ".to_string();
        assert_eq!(violation(&profile).field, "title");

        profile.first_name.clear();
        assert_eq!(violation(&profile).field, "firstName");

        let mut profile = valid_profile();
        profile.organizational_unit_path.clear();
        let v = violation(&profile);
        assert_eq!(v.field, "organizationalUnitPath");
        assert!(v.message.contains("required"));
    }

    #[test]
    fn test_rejects_malformed_primary_email() {
        let mut profile = valid_profile();
        profile.primary_email = "bad@".to_string();
        assert_eq!(violation(&profile).field, "primaryEmail");
    }

    #[test]
    fn test_rejects_malformed_secondary_email() {
        let mut profile = valid_profile();
        profile.secondary_email = "jane@gmail".to_string();
        assert_eq!(violation(&profile).field, "secondaryEmail");
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("first.last+tag@sub.acme.co"));
        assert!(!is_valid_email("bad@"));
        assert!(!is_valid_email("no-at.acme.com"));
        assert!(!is_valid_email("jane@acme.c"));
        assert!(!is_valid_email("jane doe@acme.com"));
    }

    #[test]
    fn test_rejects_foreign_domain() {
        let mut profile = valid_profile();
        profile.primary_email = "jane.doe@other.com".to_string();
        let v = violation(&profile);
        assert_eq!(v.field, "primaryEmail");
        assert!(v.message.contains("acme.com"));
    }

    #[test]
    fn test_domain_match_is_exact_and_case_insensitive() {
        let mut profile = valid_profile();
        profile.primary_email = "jane.doe@ACME.COM".to_string();
        assert_eq!(validate_profile(&profile, CALLER_DOMAIN), Ok(()));

        profile.primary_email = "jane.doe@eu.acme.com".to_string();
        assert_eq!(violation(&profile).field, "primaryEmail");

        profile.primary_email = "jane.doe@notacme.com".to_string();
        assert_eq!(violation(&profile).field, "primaryEmail");
    }

    #[test]
    fn test_rejects_phone_without_plus() {
        let mut profile = valid_profile();
        profile.phone_number = "4165551234".to_string();
        assert_eq!(violation(&profile).field, "phoneNumber");
    }

    #[test]
    fn test_rejects_phone_below_digit_floor() {
        let mut profile = valid_profile();
        profile.phone_number = "+1416555".to_string();
        assert_eq!(violation(&profile).field, "phoneNumber");
    }

    #[test]
    fn test_phone_digit_bounds() {
        assert!(is_valid_phone("+14165551"));
        assert!(is_valid_phone("+141655512345678"));
        assert!(!is_valid_phone("+1416555123456789"));
        assert!(!is_valid_phone("+1 416 555 1234"));
        assert!(!is_valid_phone("+1416555123x"));
    }

    #[test]
    fn test_manager_email_checked_when_present() {
        let mut profile = valid_profile();
        profile.manager_email = Some("boss@acme".to_string());
        assert_eq!(violation(&profile).field, "managerEmail");

        profile.manager_email = Some("boss@acme.com".to_string());
        assert_eq!(validate_profile(&profile, CALLER_DOMAIN), Ok(()));
    }

    #[test]
    fn test_length_caps_reported_in_profile_order() {
        let mut profile = valid_profile();
        profile.department = "D".repeat(101);
        profile.last_name = "L".repeat(61);

        let v = violation(&profile);
        assert_eq!(v.field, "lastName");
        assert!(v.message.contains("60"));
    }

    #[test]
    fn test_format_checked_before_domain() {
        let mut profile = valid_profile();
        profile.primary_email = "jane@other".to_string();
        let v = violation(&profile);
        assert!(v.message.contains("valid email"));
    }
}
