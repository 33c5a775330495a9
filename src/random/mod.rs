pub mod source;

pub use source::{RandomSource, RngSource, DEFAULT_WEIGHT_STD_DEV};
