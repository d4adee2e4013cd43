use crate::{layers::dense::Layer, math::matrix::Matrix};

/// RMSProp: divides each gradient by a decaying average of its recent
/// magnitudes. Per-layer cache allocated lazily, like [`crate::optim::Adam`].
pub struct RmsProp {
    pub learning_rate: f64,
    rho: f64,
    epsilon: f64,
    slots: Vec<Slot>,
}

struct Slot {
    cache_w: Matrix,
    cache_b: Matrix,
}

impl RmsProp {
    pub fn new(learning_rate: f64) -> RmsProp {
        RmsProp {
            learning_rate,
            rho: 0.9,
            epsilon: 1e-8,
            slots: Vec::new(),
        }
    }

    pub fn step(&mut self, layers: &mut [Layer], grads: Vec<(Matrix, Matrix)>) {
        let (rho, eps, lr) = (self.rho, self.epsilon, self.learning_rate);

        for (i, (layer, (w_grad, b_grad))) in layers.iter_mut().zip(grads).enumerate() {
            if self.slots.len() <= i {
                self.slots.push(Slot {
                    cache_w: Matrix::zeros(w_grad.rows, w_grad.cols),
                    cache_b: Matrix::zeros(b_grad.rows, b_grad.cols),
                });
            }
            let slot = &mut self.slots[i];

            slot.cache_w = slot.cache_w.zip_map(&w_grad, |c, g| rho * c + (1.0 - rho) * g * g);
            slot.cache_b = slot.cache_b.zip_map(&b_grad, |c, g| rho * c + (1.0 - rho) * g * g);

            let w_update = w_grad.zip_map(&slot.cache_w, |g, c| g / (c.sqrt() + eps));
            let b_update = b_grad.zip_map(&slot.cache_b, |g, c| g / (c.sqrt() + eps));

            layer.apply_gradients(w_update, b_update, lr);
        }
    }
}
