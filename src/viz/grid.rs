/// Samples per dimension of the visualization grid.
pub const GRID_STEPS: usize = 20;

/// Regular grid over the closed unit hypercube: `GRID_STEPS` evenly spaced
/// values per dimension (step 1/19, both endpoints included), full
/// Cartesian product, `GRID_STEPS^num_variables` points in total.
///
/// Enumeration is odometer order with the last dimension changing fastest.
/// Callers rely on this ordering staying in lockstep with the prediction
/// vector, one prediction per point at the same index.
pub fn sample(num_variables: usize) -> Vec<Vec<f64>> {
    let axis: Vec<f64> = (0..GRID_STEPS)
        .map(|i| i as f64 / (GRID_STEPS - 1) as f64)
        .collect();

    let mut points = Vec::new();
    let mut odometer = vec![0usize; num_variables];

    loop {
        points.push(odometer.iter().map(|&i| axis[i]).collect());

        let mut d = num_variables;
        loop {
            if d == 0 {
                return points;
            }
            d -= 1;
            odometer[d] += 1;
            if odometer[d] < GRID_STEPS {
                break;
            }
            odometer[d] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_counts_are_exponential() {
        assert_eq!(sample(1).len(), 20);
        assert_eq!(sample(2).len(), 400);
        assert_eq!(sample(3).len(), 8000);
    }

    #[test]
    fn covers_closed_unit_interval() {
        let points = sample(2);
        assert_eq!(points[0], vec![0.0, 0.0]);
        assert_eq!(points[399], vec![1.0, 1.0]);
        assert!(points
            .iter()
            .flatten()
            .all(|&x| (0.0..=1.0).contains(&x)));
    }

    #[test]
    fn last_dimension_changes_fastest() {
        let points = sample(2);
        assert_eq!(points[1], vec![0.0, 1.0 / 19.0]);
        assert_eq!(points[20], vec![1.0 / 19.0, 0.0]);
    }
}
