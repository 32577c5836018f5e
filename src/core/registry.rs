//! # Service Registry
//!
//! 애플리케이션 수명 동안 공유되는 서비스 인스턴스를 타입별로 보관하는 레지스트리입니다.
//! 서버 부트스트랩(`main.rs`)에서 설정값으로 조립된 서비스를 [`ServiceLocator::set`]으로
//! 등록하고, 핸들러는 [`ServiceLocator::get`]으로 `Arc<T>`를 꺼내 사용합니다.
//!
//! ```text
//! main.rs                         handlers
//! ┌──────────────────────┐        ┌──────────────────────────────┐
//! │ ProvisioningService  │─set──► │ ServiceLocator::get::<T>()   │
//! │ DirectoryQueryService│        │   → Arc<T> (clone, O(1))     │
//! │ TokenService         │        └──────────────────────────────┘
//! └──────────────────────┘
//! ```
//!
//! 디렉터리 게이트웨이는 trait 객체(`Arc<dyn DirectoryApi>`)로 주입되므로
//! 서비스 조립은 부트스트랩에서 명시적으로 수행하고, 레지스트리는 조회만 담당합니다.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use once_cell::sync::Lazy;
use crate::core::errors::AppError;

/// 타입 기반 서비스 로케이터
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 서비스 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        match LOCATOR.instances.write() {
            Ok(mut instances) => {
                instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
                log::info!("📦 Registering: {}", clean_name);
            }
            Err(e) => log::error!("서비스 등록 실패 ({}): {}", clean_name, e),
        }
    }

    /// 등록된 서비스 인스턴스를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 등록되지 않은 타입이거나 레지스트리 잠금이 오염된 경우
    pub fn get<T: 'static + Send + Sync>() -> Result<Arc<T>, AppError> {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        let instances = LOCATOR.instances.read()
            .map_err(|e| AppError::InternalError(format!("레지스트리 잠금 실패: {}", e)))?;

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .ok_or_else(|| AppError::InternalError(format!(
                "Service not found: {}. Make sure it's registered with ServiceLocator::set()",
                clean_name
            )))?
            .downcast::<T>()
            .map_err(|_| AppError::InternalError(format!("Type mismatch in ServiceLocator: {}", clean_name)))
    }

    fn extract_clean_type_name(type_name: &str) -> &str {
        match type_name.rfind("::") {
            Some(pos) => &type_name[pos + 2..],
            None => type_name,
        }
    }
}
