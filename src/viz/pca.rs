use rand::prelude::*;

/// Two-component principal-component projection, fit on the data it will
/// project. Used purely for visualization when the input domain has more
/// than 2 dimensions.
pub struct Pca {
    means: Vec<f64>,
    components: [Vec<f64>; 2],
}

impl Pca {
    /// Fits on `points` (all of equal dimension ≥ 2): centers by column
    /// means, forms the covariance matrix, and extracts the top two
    /// eigenvectors by power iteration with deflation.
    ///
    /// With a degenerate spectrum (the regular grid's covariance is a
    /// multiple of the identity) any orthonormal pair spans a valid
    /// projection; the random start vector picks one arbitrarily.
    pub fn fit(points: &[Vec<f64>]) -> Pca {
        let dim = points[0].len();
        let n = points.len() as f64;

        let mut means = vec![0.0; dim];
        for point in points {
            for (mean, &x) in means.iter_mut().zip(point) {
                *mean += x;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        let mut covariance = vec![vec![0.0; dim]; dim];
        for point in points {
            for i in 0..dim {
                let ci = point[i] - means[i];
                for j in i..dim {
                    covariance[i][j] += ci * (point[j] - means[j]);
                }
            }
        }
        for i in 0..dim {
            for j in i..dim {
                covariance[i][j] /= n;
                covariance[j][i] = covariance[i][j];
            }
        }

        let first = dominant_eigenvector(&covariance);
        let eigenvalue = rayleigh_quotient(&covariance, &first);
        deflate(&mut covariance, &first, eigenvalue);
        let second = dominant_eigenvector(&covariance);

        Pca {
            means,
            components: [first, second],
        }
    }

    /// Maps one point to its (x, y) coordinates in component space.
    pub fn project(&self, point: &[f64]) -> (f64, f64) {
        let centered: Vec<f64> = point
            .iter()
            .zip(self.means.iter())
            .map(|(x, mean)| x - mean)
            .collect();
        (
            dot(&centered, &self.components[0]),
            dot(&centered, &self.components[1]),
        )
    }
}

/// Approximates the dominant eigenvector of a symmetric matrix by 100
/// rounds of power iteration from a random start.
fn dominant_eigenvector(matrix: &[Vec<f64>]) -> Vec<f64> {
    let dim = matrix.len();
    let mut rng = rand::thread_rng();
    let mut v: Vec<f64> = (0..dim).map(|_| rng.gen::<f64>() - 0.5).collect();
    normalize(&mut v);

    for _ in 0..100 {
        let mut u = vec![0.0; dim];
        for i in 0..dim {
            for j in 0..dim {
                u[i] += matrix[i][j] * v[j];
            }
        }
        let norm: f64 = u.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm < 1e-12 {
            // The matrix annihilates v (fully deflated); keep the current
            // direction rather than divide by ~0.
            break;
        }
        for x in u.iter_mut() {
            *x /= norm;
        }
        v = u;
    }

    v
}

fn rayleigh_quotient(matrix: &[Vec<f64>], v: &[f64]) -> f64 {
    let dim = matrix.len();
    let mut av = vec![0.0; dim];
    for i in 0..dim {
        for j in 0..dim {
            av[i] += matrix[i][j] * v[j];
        }
    }
    dot(&av, v)
}

/// Removes the found component: A ← A − λ·v·vᵀ.
fn deflate(matrix: &mut [Vec<f64>], v: &[f64], eigenvalue: f64) {
    let dim = matrix.len();
    for i in 0..dim {
        for j in 0..dim {
            matrix[i][j] -= eigenvalue * v[i] * v[j];
        }
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn normalize(v: &mut [f64]) {
    let norm: f64 = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 1e-12 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_dominant_direction() {
        // Points spread along (1, 2, 0): the first component must align
        // with it (up to sign).
        let points: Vec<Vec<f64>> = (0..50)
            .map(|i| {
                let t = i as f64 / 10.0;
                vec![t, 2.0 * t, (i % 2) as f64 * 0.01]
            })
            .collect();

        let pca = Pca::fit(&points);
        let axis = [1.0 / 5.0_f64.sqrt(), 2.0 / 5.0_f64.sqrt(), 0.0];
        let alignment = dot(&pca.components[0], &axis).abs();
        assert!(alignment > 0.99, "component was {:?}", pca.components[0]);
    }

    #[test]
    fn components_are_orthonormal() {
        let points: Vec<Vec<f64>> = (0..5)
            .flat_map(|i| {
                (0..5).map(move |j| vec![i as f64, j as f64, (i + j) as f64])
            })
            .collect();

        let pca = Pca::fit(&points);
        let norm0 = dot(&pca.components[0], &pca.components[0]).sqrt();
        let norm1 = dot(&pca.components[1], &pca.components[1]).sqrt();
        let cross = dot(&pca.components[0], &pca.components[1]).abs();
        assert!((norm0 - 1.0).abs() < 1e-6);
        assert!((norm1 - 1.0).abs() < 1e-6);
        assert!(cross < 1e-6, "components not orthogonal: {cross}");
    }

    #[test]
    fn projection_is_finite() {
        let points: Vec<Vec<f64>> = (0..8)
            .map(|i| vec![(i & 4 != 0) as u8 as f64, (i & 2 != 0) as u8 as f64, (i & 1 != 0) as u8 as f64])
            .collect();

        let pca = Pca::fit(&points);
        for point in &points {
            let (x, y) = pca.project(point);
            assert!(x.is_finite() && y.is_finite());
        }
    }
}
