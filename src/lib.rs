pub mod activation;
pub mod error;
pub mod loss;
pub mod math;
pub mod random;
pub mod rbm;
pub mod train;

// Convenience re-exports
pub use activation::logistic::logistic;
pub use error::{RbmError, RbmResult};
pub use loss::reconstruction::ReconstructionLoss;
pub use math::matrix::Matrix;
pub use random::source::{RandomSource, RngSource, DEFAULT_WEIGHT_STD_DEV};
pub use rbm::config::{RbmConfig, DEFAULT_LEARNING_RATE};
pub use rbm::machine::Rbm;
pub use train::epoch_stats::EpochStats;
pub use train::train_config::{TrainConfig, DEFAULT_MAX_EPOCHS};
