use crate::{layers::dense::Layer, math::matrix::Matrix};

/// Adam with bias-corrected first and second moment estimates.
///
/// Moment state is kept per layer and allocated lazily on the first step,
/// so the optimizer needs no knowledge of the network shape up front.
pub struct Adam {
    pub learning_rate: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    t: i32,
    slots: Vec<Slot>,
}

struct Slot {
    m_w: Matrix,
    v_w: Matrix,
    m_b: Matrix,
    v_b: Matrix,
}

impl Adam {
    pub fn new(learning_rate: f64) -> Adam {
        Adam {
            learning_rate,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
            t: 0,
            slots: Vec::new(),
        }
    }

    pub fn step(&mut self, layers: &mut [Layer], grads: Vec<(Matrix, Matrix)>) {
        self.t += 1;
        let (b1, b2, eps, lr) = (self.beta1, self.beta2, self.epsilon, self.learning_rate);
        let bias1 = 1.0 - b1.powi(self.t);
        let bias2 = 1.0 - b2.powi(self.t);

        for (i, (layer, (w_grad, b_grad))) in layers.iter_mut().zip(grads).enumerate() {
            if self.slots.len() <= i {
                self.slots.push(Slot {
                    m_w: Matrix::zeros(w_grad.rows, w_grad.cols),
                    v_w: Matrix::zeros(w_grad.rows, w_grad.cols),
                    m_b: Matrix::zeros(b_grad.rows, b_grad.cols),
                    v_b: Matrix::zeros(b_grad.rows, b_grad.cols),
                });
            }
            let slot = &mut self.slots[i];

            slot.m_w = slot.m_w.zip_map(&w_grad, |m, g| b1 * m + (1.0 - b1) * g);
            slot.v_w = slot.v_w.zip_map(&w_grad, |v, g| b2 * v + (1.0 - b2) * g * g);
            slot.m_b = slot.m_b.zip_map(&b_grad, |m, g| b1 * m + (1.0 - b1) * g);
            slot.v_b = slot.v_b.zip_map(&b_grad, |v, g| b2 * v + (1.0 - b2) * g * g);

            let w_update = slot
                .m_w
                .zip_map(&slot.v_w, |m, v| (m / bias1) / ((v / bias2).sqrt() + eps));
            let b_update = slot
                .m_b
                .zip_map(&slot.v_b, |m, v| (m / bias1) / ((v / bias2).sqrt() + eps));

            layer.apply_gradients(w_update, b_update, lr);
        }
    }
}
