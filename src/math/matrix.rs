use serde::{Serialize, Deserialize};
use std::ops::{Add, Sub, Mul};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            (self.data)
                .clone()
                .into_iter()
                .map(|row| row.into_iter().map(|x| functor(x)).collect())
                .collect()
        )
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data[0].len(),
            data
        }
    }

    /// Serializes the matrix to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a matrix from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Matrix> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res =  Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_requested_shape() {
        let m = Matrix::zeros(3, 5);
        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 5);
        assert!(m.data.iter().all(|row| row.iter().all(|&x| x == 0.0)));
    }

    #[test]
    fn multiply_known_values() {
        let a = Matrix::from_data(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
        ]);
        let b = Matrix::from_data(vec![
            vec![7.0, 8.0],
            vec![9.0, 10.0],
            vec![11.0, 12.0],
        ]);

        let c = a * b;

        assert_eq!(c.rows, 2);
        assert_eq!(c.cols, 2);
        assert_eq!(c.data, vec![vec![58.0, 64.0], vec![139.0, 154.0]]);
    }

    #[test]
    fn transpose_swaps_axes() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = m.transpose();

        assert_eq!(t.rows, 3);
        assert_eq!(t.cols, 2);
        assert_eq!(t.data, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    }

    #[test]
    fn map_applies_elementwise() {
        let m = Matrix::from_data(vec![vec![1.0, -2.0], vec![3.0, -4.0]]);
        let doubled = m.map(|x| x * 2.0);

        assert_eq!(doubled.data, vec![vec![2.0, -4.0], vec![6.0, -8.0]]);
    }

    #[test]
    fn add_and_sub_are_elementwise() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_data(vec![vec![0.5, 0.5], vec![0.5, 0.5]]);

        let sum = a.clone() + b.clone();
        let diff = a - b;

        assert_eq!(sum.data, vec![vec![1.5, 2.5], vec![3.5, 4.5]]);
        assert_eq!(diff.data, vec![vec![0.5, 1.5], vec![2.5, 3.5]]);
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn multiply_rejects_mismatched_inner_dimension() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let _ = a * b;
    }

    #[test]
    fn json_round_trip_preserves_values() {
        let m = Matrix::from_data(vec![vec![0.0, -1.25, 2.5], vec![3.0, 4.0, 5.0]]);
        let path = std::env::temp_dir().join("magnetite_rbm_matrix_round_trip.json");
        let path = path.to_str().unwrap();

        m.save_json(path).unwrap();
        let loaded = Matrix::load_json(path).unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(loaded, m);
    }

    #[test]
    fn json_round_trip_is_exact_at_full_float_precision() {
        // Trained weights need every one of the 17 significant digits the
        // writer emits; reloading must land on the same bits, not 1 ulp off.
        let m = Matrix::from_data(vec![
            vec![-0.15644565110467581, 0.1 + 0.2, 1.0 / 3.0],
            vec![std::f64::consts::PI, f64::MIN_POSITIVE, f64::MAX],
        ]);
        let path = std::env::temp_dir().join("magnetite_rbm_matrix_full_precision.json");
        let path = path.to_str().unwrap();

        m.save_json(path).unwrap();
        let loaded = Matrix::load_json(path).unwrap();
        std::fs::remove_file(path).ok();

        for (loaded_row, row) in loaded.data.iter().zip(m.data.iter()) {
            for (&got, &want) in loaded_row.iter().zip(row.iter()) {
                assert_eq!(got.to_bits(), want.to_bits(), "reloaded {got}, saved {want}");
            }
        }
    }
}
