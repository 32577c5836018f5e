use std::fmt;
use serde::{Serialize, Serializer};

/// 신규 계정의 임시 비밀번호
///
/// 계정 생성 요청과 웰컴 알림 사이에만 메모리에 존재합니다.
/// `Debug`/`Display` 출력은 마스킹되며, 원문은 [`expose_secret`](Self::expose_secret)으로만 접근합니다.
#[derive(Clone, PartialEq, Eq)]
pub struct TemporaryCredential(String);

impl TemporaryCredential {
    pub fn new(secret: String) -> Self {
        Self(secret)
    }

    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for TemporaryCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TemporaryCredential(***)")
    }
}

impl fmt::Display for TemporaryCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// 디렉터리 생성 요청 본문에는 원문이 들어갑니다.
impl Serialize for TemporaryCredential {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_are_redacted() {
        let credential = TemporaryCredential::new("Ab3$efghijkl".to_string());

        assert!(!format!("{:?}", credential).contains("Ab3$"));
        assert_eq!(credential.to_string(), "***");
        assert_eq!(credential.expose_secret(), "Ab3$efghijkl");
        assert_eq!(credential.len(), 12);
    }

    #[test]
    fn test_serializes_plain_secret() {
        let credential = TemporaryCredential::new("Ab3$efghijkl".to_string());
        let json = serde_json::to_string(&credential).unwrap();
        assert_eq!(json, "\"Ab3$efghijkl\"");
    }
}
