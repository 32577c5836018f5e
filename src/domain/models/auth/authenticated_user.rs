use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// JWT 토큰에서 추출된 호출자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 토큰 주체 (`sub`)
    pub user_id: String,

    /// 호출자 이메일 (`email` 클레임)
    pub email: Option<String>,
}

impl AuthenticatedUser {
    /// 디렉터리 호출에 사용할 주소
    ///
    /// `email` 클레임을 우선 사용하고, 없으면 주소 형식의 `sub`를 사용합니다.
    pub fn directory_address(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .or_else(|| Some(self.user_id.trim()).filter(|sub| sub.contains('@')))
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}
