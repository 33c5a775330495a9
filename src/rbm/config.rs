use serde::{Serialize, Deserialize};

/// Learning rate used when none is specified.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// A serializable description of an engine: unit counts plus the learning
/// rate of the contrastive-divergence update. Can be stored independently
/// of any trained weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbmConfig {
    /// Number of visible (observed) units.
    pub num_visible: usize,
    /// Number of hidden (latent) units.
    pub num_hidden: usize,
    /// Step size of the weight update. Must be positive.
    pub learning_rate: f64,
}

impl RbmConfig {
    /// Creates a config with the default learning rate of 0.1.
    pub fn new(num_visible: usize, num_hidden: usize) -> Self {
        RbmConfig {
            num_visible,
            num_hidden,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }
}
