use crate::{layers::dense::Layer, math::matrix::Matrix};

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one plain gradient step to every layer.
    /// `grads` holds one averaged (weights, biases) gradient pair per layer.
    pub fn step(&mut self, layers: &mut [Layer], grads: Vec<(Matrix, Matrix)>) {
        for (layer, (w_grad, b_grad)) in layers.iter_mut().zip(grads) {
            layer.apply_gradients(w_grad, b_grad, self.learning_rate);
        }
    }
}
