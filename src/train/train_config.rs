use std::sync::mpsc;
use crate::train::epoch_stats::EpochStats;

/// Number of epochs a default `TrainConfig` runs.
pub const DEFAULT_MAX_EPOCHS: usize = 1000;

/// Configuration for an `Rbm::train` run.
///
/// # Fields
/// - `epochs`      — number of CD-1 iterations to run; always exhausted in full
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch. A dropped receiver is ignored: training
///                   has no early exit and always runs the full epoch count.
pub struct TrainConfig {
    pub epochs: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            progress_tx: None,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(DEFAULT_MAX_EPOCHS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_one_thousand_epochs_with_no_channel() {
        let config = TrainConfig::default();
        assert_eq!(config.epochs, 1000);
        assert!(config.progress_tx.is_none());
    }
}
