use crate::error::{Error, Result};
use crate::layers::dense::Layer;
use crate::math::matrix::Matrix;
use crate::optim::{Adam, RmsProp, Sgd};

/// Capability lookup from an optimizer wire name to a stateful optimizer.
///
/// Resolution happens once, before the first epoch; an unknown name aborts
/// the request there.
pub enum Optimizer {
    Sgd(Sgd),
    Adam(Adam),
    RmsProp(RmsProp),
}

impl Optimizer {
    pub fn from_name(name: &str, learning_rate: f64) -> Result<Optimizer> {
        match name {
            "sgd" => Ok(Optimizer::Sgd(Sgd::new(learning_rate))),
            "adam" => Ok(Optimizer::Adam(Adam::new(learning_rate))),
            "rmsprop" => Ok(Optimizer::RmsProp(RmsProp::new(learning_rate))),
            _ => Err(Error::UnknownOptimizer {
                name: name.to_owned(),
            }),
        }
    }

    /// Applies one update to every layer from averaged full-batch gradients.
    pub fn step(&mut self, layers: &mut [Layer], grads: Vec<(Matrix, Matrix)>) {
        match self {
            Optimizer::Sgd(inner) => inner.step(layers, grads),
            Optimizer::Adam(inner) => inner.step(layers, grads),
            Optimizer::RmsProp(inner) => inner.step(layers, grads),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lookup_fails_closed() {
        assert!(Optimizer::from_name("sgd", 0.1).is_ok());
        assert!(Optimizer::from_name("adam", 0.001).is_ok());
        assert!(Optimizer::from_name("rmsprop", 0.001).is_ok());
        assert!(matches!(
            Optimizer::from_name("adagrad", 0.001),
            Err(Error::UnknownOptimizer { name }) if name == "adagrad"
        ));
    }
}
