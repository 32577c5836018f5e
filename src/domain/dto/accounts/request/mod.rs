pub mod create_account_request;

pub use create_account_request::CreateAccountRequest;
