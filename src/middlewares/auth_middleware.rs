//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 운영자 JWT 토큰을 검증하고 호출자 정보를 추출합니다.
//! 보호된 스코프의 모든 요청은 유효한 Bearer 토큰이 있어야 핸들러에 도달합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 고정된 검증 서비스. 없으면 요청마다 `ServiceLocator`에서 조회합니다.
    token_service: Option<Arc<TokenService>>,
}

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self { token_service: None }
    }

    /// 주어진 검증 서비스를 사용하는 필수 인증 미들웨어 생성
    pub fn with_token_service(token_service: Arc<TokenService>) -> Self {
        Self {
            token_service: Some(token_service),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::token_service::test_support::{issue_token, TEST_SECRET};

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({
            "sub": user.user_id,
            "email": user.email,
        }))
    }

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(TEST_SECRET, 0))
    }

    #[actix_web::test]
    async fn test_missing_token_is_rejected() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(AuthMiddleware::with_token_service(token_service()))
                    .route("/whoami", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "authentication_required");
    }

    #[actix_web::test]
    async fn test_invalid_token_is_rejected() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(AuthMiddleware::with_token_service(token_service()))
                    .route("/whoami", web::get().to(whoami)),
            ),
        )
        .await;

        let forged = issue_token("someone-else", "admin@acme.com", None, 600);
        let req = test::TestRequest::get()
            .uri("/api/whoami")
            .insert_header(("Authorization", format!("Bearer {}", forged)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(AuthMiddleware::with_token_service(token_service()))
                    .route("/whoami", web::get().to(whoami)),
            ),
        )
        .await;

        let token = issue_token(TEST_SECRET, "op-1", Some("admin@acme.com"), 600);
        let req = test::TestRequest::get()
            .uri("/api/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["sub"], "op-1");
        assert_eq!(body["email"], "admin@acme.com");
    }
}
