use serde::Serialize;

use crate::network::network::Network;
use crate::viz::grid;
use crate::viz::pca::Pca;

/// One sample of the learned decision surface: (x, y) in the (possibly
/// projected) input domain, z the model's prediction there.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Samples the unit hypercube on a 20-per-dimension grid, predicts every
/// point with the trained network, and reduces coordinates to 2 dimensions
/// when there are more than 2 input variables.
///
/// - 2 variables: raw grid coordinates are (x, y).
/// - more than 2: a principal-component projection fit on the grid itself
///   maps each point to (x, y).
/// - 1 variable: the single axis is x, and the prediction doubles as y and
///   z, so the result reads as a 2-D curve.
///
/// The output has exactly one entry per grid point, in grid order.
pub fn decision_surface(network: &mut Network, num_variables: usize) -> Vec<ScatterPoint> {
    let points = grid::sample(num_variables);
    let predictions: Vec<f64> = points
        .iter()
        .map(|point| network.forward(point.clone())[0])
        .collect();

    match num_variables {
        1 => points
            .iter()
            .zip(predictions)
            .map(|(point, z)| ScatterPoint { x: point[0], y: z, z })
            .collect(),
        2 => points
            .iter()
            .zip(predictions)
            .map(|(point, z)| ScatterPoint { x: point[0], y: point[1], z })
            .collect(),
        _ => {
            let pca = Pca::fit(&points);
            points
                .iter()
                .zip(predictions)
                .map(|(point, z)| {
                    let (x, y) = pca.project(point);
                    ScatterPoint { x, y, z }
                })
                .collect()
        }
    }
}
