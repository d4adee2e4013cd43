use rand::prelude::*;
use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    /// Both u1 and u2 must be uniform on (0, 1].
    fn sample_standard_normal(rng: &mut ThreadRng) -> f64 {
        // Draw two independent uniform samples in (0, 1] to avoid log(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// He initialization: samples from N(0, sqrt(2 / rows)).
    ///
    /// Used before ReLU-family layers. The variance 2/fan_in accounts for
    /// the fact that ReLU zeroes half of its inputs on average.
    ///
    /// Shape: (rows, cols). `rows` is the fan-in: weight matrices are laid
    /// out (input_size, output_size).
    pub fn he(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let std_dev = (2.0 / rows as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(&mut rng) * std_dev;
            }
        }
        res
    }

    /// Xavier (Glorot) initialization: samples from N(0, sqrt(1 / rows)).
    ///
    /// Used before Sigmoid/Tanh/Identity layers. Keeps the variance of
    /// activations and gradients roughly equal across layers.
    ///
    /// Shape: (rows, cols). `rows` is the fan-in, as in `he()`.
    pub fn xavier(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let std_dev = (1.0 / rows as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(&mut rng) * std_dev;
            }
        }
        res
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
            self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        )
    }

    /// Element-wise combination of two same-shape matrices.
    ///
    /// `zip_map(|a, b| a * b)` is the Hadamard product; the optimizers use
    /// other combinations for their moment updates.
    pub fn zip_map<F>(&self, rhs: &Matrix, functor: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!(self.rows, rhs.rows);
        assert_eq!(self.cols, rhs.cols);
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a
                    .iter()
                    .zip(row_b.iter())
                    .map(|(&x, &y)| functor(x, y))
                    .collect()
            })
            .collect();
        Matrix::from_data(data)
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data[0].len(),
            data,
        }
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

        let mut res = Matrix::zeros(self.rows, rhs.cols);

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
    fn mul_shapes_and_values() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_data(vec![vec![5.0], vec![6.0]]);
        let c = a * b;
        assert_eq!(c.rows, 2);
        assert_eq!(c.cols, 1);
        assert_eq!(c.data, vec![vec![17.0], vec![39.0]]);
    }

    #[test]
    fn zip_map_is_elementwise() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0]]);
        let b = Matrix::from_data(vec![vec![3.0, 4.0]]);
        let h = a.zip_map(&b, |x, y| x * y);
        assert_eq!(h.data, vec![vec![3.0, 8.0]]);
    }

    #[test]
    fn he_init_uses_row_fan_in() {
        let w = Matrix::he(100, 3);
        assert_eq!((w.rows, w.cols), (100, 3));
        // std is sqrt(2/100) ≈ 0.14; a sample beyond 1.0 would be ~7 sigma
        // and catches a swapped fan-in.
        assert!(w.data.iter().flatten().all(|x| x.abs() < 1.0));
    }
}
