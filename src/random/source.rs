use rand::prelude::*;
use std::f64::consts::PI;

/// Standard deviation used for weight initialization.
pub const DEFAULT_WEIGHT_STD_DEV: f64 = 0.1;

/// Supplies the two kinds of randomness the engine consumes: gaussian draws
/// for weight initialization and uniform draws for stochastic binarization.
///
/// Injecting the source (rather than reaching for a process-wide generator)
/// makes every operation reproducible: given a fixed source, training and
/// sampling are fully deterministic.
pub trait RandomSource {
    /// One independent draw from a zero-mean gaussian at the configured
    /// standard deviation.
    fn gaussian(&mut self) -> f64;

    /// One independent draw from the half-open unit interval [0, 1).
    fn uniform(&mut self) -> f64;
}

/// A `RandomSource` backed by any `rand` generator.
pub struct RngSource<R: Rng> {
    rng: R,
    std_dev: f64,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R, std_dev: f64) -> RngSource<R> {
        RngSource { rng, std_dev }
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    /// Both u1 and u2 must be uniform on (0, 1].
    fn sample_standard_normal(&mut self) -> f64 {
        // Draw two independent uniform samples in (0, 1] to avoid log(0).
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = 1.0 - self.rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}

impl RngSource<ThreadRng> {
    /// Entropy-backed source using the thread-local generator.
    pub fn thread(std_dev: f64) -> RngSource<ThreadRng> {
        RngSource::new(rand::thread_rng(), std_dev)
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: equal seeds yield equal draw sequences.
    pub fn seeded(seed: u64, std_dev: f64) -> RngSource<StdRng> {
        RngSource::new(StdRng::seed_from_u64(seed), std_dev)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn gaussian(&mut self) -> f64 {
        self.sample_standard_normal() * self.std_dev
    }

    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
