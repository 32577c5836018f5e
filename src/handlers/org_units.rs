//! 조직 단위(OU) 드롭다운 핸들러

use actix_web::{get, HttpResponse};
use crate::core::registry::ServiceLocator;
use crate::domain::models::auth::{AuthenticatedUser, CallerContext};
use crate::services::directory::DirectoryQueryService;

/// 호출자가 볼 수 있는 OU 목록 (경로순)
///
/// ```json
/// [{"path": "/", "displayName": "Acme Corp"}, {"path": "/Engineering", "displayName": "Engineering"}]
/// ```
#[get("/org-units")]
pub async fn list_org_units(user: AuthenticatedUser) -> Result<HttpResponse, actix_web::Error> {
    let caller = CallerContext::from_user(&user)?;

    let service = ServiceLocator::get::<DirectoryQueryService>()?;
    let units = service.get_org_units(&caller).await?;

    Ok(HttpResponse::Ok().json(units))
}
