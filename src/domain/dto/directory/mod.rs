pub mod directory_options;

pub use directory_options::*;
