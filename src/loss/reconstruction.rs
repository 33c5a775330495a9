use crate::math::matrix::Matrix;

pub struct ReconstructionLoss;

impl ReconstructionLoss {
    /// Summed squared error: sum((original - reconstruction)^2) over every entry.
    ///
    /// Diagnostic only; the gradient never flows through this value.
    pub fn loss(original: &Matrix, reconstruction: &Matrix) -> f64 {
        original.data.iter().zip(reconstruction.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter())
                    .map(|(a, b)| (a - b).powi(2))
                    .sum::<f64>()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_matrices_have_zero_loss() {
        let m = Matrix::from_data(vec![vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 0.0]]);
        assert_eq!(ReconstructionLoss::loss(&m, &m), 0.0);
    }

    #[test]
    fn loss_sums_squared_differences_over_all_entries() {
        let a = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let b = Matrix::from_data(vec![vec![0.5, 0.5], vec![0.0, 0.0]]);

        // (0.5^2 + 0.5^2) + (0^2 + 1^2) = 1.5
        assert!((ReconstructionLoss::loss(&a, &b) - 1.5).abs() < 1e-12);
    }
}
