//! 호출자 인증 모델

pub mod authenticated_user;
pub mod caller_context;

pub use authenticated_user::AuthenticatedUser;
pub use caller_context::CallerContext;
