use std::time::Instant;

use rand::rngs::{StdRng, ThreadRng};

use crate::activation::logistic::logistic;
use crate::error::{RbmError, RbmResult};
use crate::loss::reconstruction::ReconstructionLoss;
use crate::math::matrix::Matrix;
use crate::random::source::{RandomSource, RngSource, DEFAULT_WEIGHT_STD_DEV};
use crate::rbm::config::RbmConfig;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// A Restricted Boltzmann Machine: two layers of binary units trained with
/// single-step contrastive divergence and sampled with alternating Gibbs
/// steps.
///
/// The weight matrix has shape (num_visible + 1) x (num_hidden + 1). Row 0
/// holds the hidden units' bias weights, column 0 the visible units' bias
/// weights. The corner entry ties the two constant bias units together,
/// carries no meaning, and stays pinned at zero.
pub struct Rbm<S: RandomSource> {
    num_visible: usize,
    num_hidden: usize,
    learning_rate: f64,
    weights: Matrix,
    source: S,
}

impl Rbm<RngSource<ThreadRng>> {
    /// Builds an engine with the default learning rate and an entropy-backed
    /// random source.
    pub fn new(num_visible: usize, num_hidden: usize) -> RbmResult<Self> {
        Rbm::from_config(
            RbmConfig::new(num_visible, num_hidden),
            RngSource::thread(DEFAULT_WEIGHT_STD_DEV),
        )
    }
}

impl Rbm<RngSource<StdRng>> {
    /// Builds a fully reproducible engine: equal seeds yield equal weights,
    /// training trajectories, and samples.
    pub fn seeded(num_visible: usize, num_hidden: usize, seed: u64) -> RbmResult<Self> {
        Rbm::from_config(
            RbmConfig::new(num_visible, num_hidden),
            RngSource::seeded(seed, DEFAULT_WEIGHT_STD_DEV),
        )
    }
}

impl<S: RandomSource> Rbm<S> {
    /// Builds an engine from a config and an injected random source.
    ///
    /// Every non-bias weight is drawn from the source's gaussian; the bias
    /// row and column start at zero.
    ///
    /// # Errors
    /// `InvalidDimension` if either unit count is zero or the learning rate
    /// is not positive.
    pub fn from_config(config: RbmConfig, mut source: S) -> RbmResult<Self> {
        if config.num_visible == 0 {
            return Err(RbmError::InvalidDimension { parameter: "num_visible", value: 0.0 });
        }
        if config.num_hidden == 0 {
            return Err(RbmError::InvalidDimension { parameter: "num_hidden", value: 0.0 });
        }
        if !(config.learning_rate > 0.0) {
            return Err(RbmError::InvalidDimension {
                parameter: "learning_rate",
                value: config.learning_rate,
            });
        }

        let mut weights = Matrix::zeros(config.num_visible + 1, config.num_hidden + 1);
        for i in 1..=config.num_visible {
            for j in 1..=config.num_hidden {
                weights.data[i][j] = source.gaussian();
            }
        }

        Ok(Rbm {
            num_visible: config.num_visible,
            num_hidden: config.num_hidden,
            learning_rate: config.learning_rate,
            weights,
            source,
        })
    }

    /// Rebuilds an engine around a previously persisted weight matrix. Unit
    /// counts are inferred from the data grid itself, never from the
    /// `rows`/`cols` header fields, so a hand-edited or corrupt file cannot
    /// smuggle in a matrix that disagrees with its own header; the header
    /// is normalized to the grid. The corner entry is pinned back to zero
    /// on load.
    ///
    /// # Errors
    /// `InvalidDimension` if the grid lacks a bias row/column plus at least
    /// one real unit per side, or the learning rate is not positive;
    /// `ShapeMismatch` if the grid is ragged.
    pub fn from_weights(weights: Matrix, learning_rate: f64, source: S) -> RbmResult<Self> {
        let rows = weights.data.len();
        if rows < 2 {
            return Err(RbmError::InvalidDimension {
                parameter: "num_visible",
                value: rows as f64 - 1.0,
            });
        }
        let cols = weights.data[0].len();
        for (i, row) in weights.data.iter().enumerate() {
            if row.len() != cols {
                return Err(RbmError::ShapeMismatch {
                    expected: cols,
                    got: row.len(),
                    row: i,
                });
            }
        }
        if cols < 2 {
            return Err(RbmError::InvalidDimension {
                parameter: "num_hidden",
                value: cols as f64 - 1.0,
            });
        }
        if !(learning_rate > 0.0) {
            return Err(RbmError::InvalidDimension {
                parameter: "learning_rate",
                value: learning_rate,
            });
        }

        let mut weights = weights;
        weights.rows = rows;
        weights.cols = cols;
        weights.data[0][0] = 0.0;

        Ok(Rbm {
            num_visible: rows - 1,
            num_hidden: cols - 1,
            learning_rate,
            weights,
            source,
        })
    }

    /// The learned weight matrix, bias row and column included.
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn num_visible(&self) -> usize {
        self.num_visible
    }

    pub fn num_hidden(&self) -> usize {
        self.num_hidden
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Serializes the raw weight matrix to a pretty-printed JSON file.
    /// Reload with `Matrix::load_json` and `Rbm::from_weights`.
    pub fn save_weights_json(&self, path: &str) -> std::io::Result<()> {
        self.weights.save_json(path)
    }

    /// Trains the machine with single-step contrastive divergence.
    ///
    /// Each epoch clamps the visible units to the data and samples hidden
    /// states (positive phase), reconstructs the visible layer from those
    /// states and recomputes the hidden probabilities from the
    /// reconstruction (negative phase), then nudges every weight toward the
    /// difference of the two association matrices. Runs exactly `config.epochs`
    /// iterations; there is no convergence check and no early exit.
    /// `epochs == 0` is a no-op.
    ///
    /// The training set is copied before bias augmentation; the caller's
    /// rows are never modified.
    ///
    /// Returns the last epoch's reconstruction error (0.0 when no epoch
    /// ran).
    ///
    /// # Errors
    /// `ShapeMismatch` if any row's length differs from `num_visible`. A
    /// rejected call leaves the weight matrix untouched.
    ///
    /// # Panics
    /// Panics if `data` is empty.
    pub fn train(&mut self, data: &[Vec<f64>], config: &TrainConfig) -> RbmResult<f64> {
        assert!(!data.is_empty(), "training data must not be empty");
        self.check_rows(data, self.num_visible)?;

        let num_examples = data.len() as f64;
        let augmented = augment(data, self.num_visible);
        let mut last_error = 0.0;

        log::info!(
            "Training CD-1 for {} epochs on {} examples",
            config.epochs,
            data.len()
        );

        for epoch in 1..=config.epochs {
            let t_start = Instant::now();

            // Positive phase: clamp to the data and sample hidden states.
            let pos_hidden_activations = augmented.clone() * self.weights.clone();
            let mut pos_hidden_probs = pos_hidden_activations.map(logistic);
            pin_bias_column(&mut pos_hidden_probs);
            let pos_hidden_states = self.binarize(&pos_hidden_probs);
            // Associations use the activation probabilities, not the
            // sampled states.
            let pos_associations = augmented.transpose() * pos_hidden_probs;

            // Negative phase: reconstruct the visible layer from the sampled
            // hidden states, then recompute the hidden probabilities.
            let neg_visible_activations = pos_hidden_states * self.weights.transpose();
            let mut neg_visible_probs = neg_visible_activations.map(logistic);
            pin_bias_column(&mut neg_visible_probs);
            let neg_hidden_activations = neg_visible_probs.clone() * self.weights.clone();
            let neg_hidden_probs = neg_hidden_activations.map(logistic);
            let neg_associations = neg_visible_probs.transpose() * neg_hidden_probs;

            // Gradient ascent on the CD-1 approximation of the
            // log-likelihood gradient.
            let scale = self.learning_rate / num_examples;
            let mut delta = (pos_associations - neg_associations).map(|x| x * scale);
            // The corner couples the two constant bias units and is never
            // updated.
            delta.data[0][0] = 0.0;
            self.weights = self.weights.clone() + delta;

            let reconstruction_error = ReconstructionLoss::loss(&augmented, &neg_visible_probs);
            last_error = reconstruction_error;

            log::debug!(
                "Epoch {}/{}: reconstruction error = {:.6}",
                epoch,
                config.epochs,
                reconstruction_error
            );

            if let Some(ref tx) = config.progress_tx {
                let stats = EpochStats {
                    epoch,
                    total_epochs: config.epochs,
                    reconstruction_error,
                    elapsed_ms: t_start.elapsed().as_millis() as u64,
                };
                // A dropped receiver never cuts training short.
                let _ = tx.send(stats);
            }
        }

        Ok(last_error)
    }

    /// Samples hidden states for each row of visible states.
    ///
    /// Returns one row per input row, `num_hidden` entries each, every
    /// entry exactly 0.0 or 1.0.
    ///
    /// # Errors
    /// `ShapeMismatch` if any row's length differs from `num_visible`.
    pub fn run_visible(&mut self, data: &[Vec<f64>]) -> RbmResult<Vec<Vec<f64>>> {
        let weights = self.weights.clone();
        self.sample_layer(data, self.num_visible, weights)
    }

    /// Dual of `run_visible`: samples visible states for each row of hidden
    /// states.
    pub fn run_hidden(&mut self, data: &[Vec<f64>]) -> RbmResult<Vec<Vec<f64>>> {
        let weights = self.weights.transpose();
        self.sample_layer(data, self.num_hidden, weights)
    }

    /// Runs a single alternating-Gibbs chain and records the visible layer
    /// at every step (daydreaming).
    ///
    /// Sample 0 seeds the chain with raw uniform draws. Two quirks of the
    /// procedure are deliberate: the seed row's bias slot keeps its uniform
    /// draw instead of being pinned to 1, and the recorded samples are
    /// binarized states rather than the real-valued probabilities some
    /// training guides recommend for the final pass.
    ///
    /// Returns exactly `num_samples` rows of `num_visible` values; row 0 is
    /// the random seed. `num_samples == 0` yields an empty vector.
    pub fn daydream(&mut self, num_samples: usize) -> Vec<Vec<f64>> {
        if num_samples == 0 {
            return Vec::new();
        }

        let width = self.num_visible + 1;
        let mut samples = vec![vec![1.0; width]; num_samples];
        for slot in samples[0].iter_mut() {
            *slot = self.source.uniform();
        }

        for i in 1..num_samples {
            let visible = Matrix::from_data(vec![samples[i - 1].clone()]);

            let hidden_probs = (visible * self.weights.clone()).map(logistic);
            let mut hidden_states = self.binarize(&hidden_probs);
            // The hidden bias unit always stays on.
            hidden_states.data[0][0] = 1.0;

            let visible_probs = (hidden_states * self.weights.transpose()).map(logistic);
            let visible_states = self.binarize(&visible_probs);

            // The bias anchor stays at 1; only the real units are stored.
            samples[i][1..].copy_from_slice(&visible_states.data[0][1..]);
        }

        samples.into_iter().map(|row| row[1..].to_vec()).collect()
    }

    /// Shared propagation for both inference directions: augment a private
    /// copy of the input, multiply through `weights`, squash, binarize, and
    /// strip the bias column.
    fn sample_layer(
        &mut self,
        data: &[Vec<f64>],
        expected_width: usize,
        weights: Matrix,
    ) -> RbmResult<Vec<Vec<f64>>> {
        self.check_rows(data, expected_width)?;
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let augmented = augment(data, expected_width);
        let probs = (augmented * weights).map(logistic);
        let states = self.binarize(&probs);

        Ok(strip_bias_column(states))
    }

    /// Turns probabilities into 0/1 states, one uniform draw per entry in
    /// row-major order.
    fn binarize(&mut self, probs: &Matrix) -> Matrix {
        let mut states = Matrix::zeros(probs.rows, probs.cols);
        for i in 0..probs.rows {
            for j in 0..probs.cols {
                states.data[i][j] = if probs.data[i][j] > self.source.uniform() {
                    1.0
                } else {
                    0.0
                };
            }
        }
        states
    }

    fn check_rows(&self, rows: &[Vec<f64>], expected: usize) -> RbmResult<()> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(RbmError::ShapeMismatch {
                    expected,
                    got: row.len(),
                    row: i,
                });
            }
        }
        Ok(())
    }
}

/// Copies `rows` into a matrix with a constant-1 bias column prepended.
fn augment(rows: &[Vec<f64>], width: usize) -> Matrix {
    let mut res = Matrix::zeros(rows.len(), width + 1);
    for (i, row) in rows.iter().enumerate() {
        res.data[i][0] = 1.0;
        res.data[i][1..].copy_from_slice(row);
    }
    res
}

/// Pins the bias column (column 0) of every row to 1.
fn pin_bias_column(m: &mut Matrix) {
    for row in &mut m.data {
        row[0] = 1.0;
    }
}

/// Drops the bias column, returning plain sample rows.
fn strip_bias_column(states: Matrix) -> Vec<Vec<f64>> {
    states.data.into_iter().map(|row| row[1..].to_vec()).collect()
}
