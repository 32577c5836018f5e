pub mod provisioned_account;

pub use provisioned_account::*;
