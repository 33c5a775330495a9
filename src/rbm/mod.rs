pub mod config;
pub mod machine;

pub use config::{RbmConfig, DEFAULT_LEARNING_RATE};
pub use machine::Rbm;
