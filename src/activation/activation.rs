use std::f64::consts::{E, PI};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum ActivationFunction {
    Sigmoid,
    ReLU,
    Tanh,
    Identity,
    LeakyReLU { alpha: f64 },
    Elu { alpha: f64 },
    Gelu,
    Swish,
}

impl ActivationFunction {
    /// Resolves a wire-format activation name.
    ///
    /// The vocabulary is the one the request payload uses (Keras-style
    /// lowercase names). An unrecognized name is a configuration error;
    /// nothing is silently substituted.
    pub fn from_name(name: &str) -> Result<ActivationFunction> {
        match name {
            "sigmoid" => Ok(ActivationFunction::Sigmoid),
            "relu" => Ok(ActivationFunction::ReLU),
            "tanh" => Ok(ActivationFunction::Tanh),
            "linear" | "identity" => Ok(ActivationFunction::Identity),
            "leaky_relu" => Ok(ActivationFunction::LeakyReLU { alpha: 0.01 }),
            "elu" => Ok(ActivationFunction::Elu { alpha: 1.0 }),
            "gelu" => Ok(ActivationFunction::Gelu),
            "swish" => Ok(ActivationFunction::Swish),
            _ => Err(Error::UnknownActivation {
                name: name.to_owned(),
            }),
        }
    }

    /// True for activations whose layers should get He-initialized weights;
    /// the rest use Xavier.
    pub fn prefers_he_init(&self) -> bool {
        matches!(
            self,
            ActivationFunction::ReLU
                | ActivationFunction::LeakyReLU { .. }
                | ActivationFunction::Elu { .. }
                | ActivationFunction::Gelu
                | ActivationFunction::Swish
        )
    }

    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Identity => x,
            ActivationFunction::LeakyReLU { alpha } => if x > 0.0 { x } else { alpha * x },
            ActivationFunction::Elu { alpha } => {
                if x > 0.0 { x } else { alpha * (E.powf(x) - 1.0) }
            }
            ActivationFunction::Gelu => {
                let c = (2.0_f64 / PI).sqrt();
                0.5 * x * (1.0 + (c * (x + 0.044715 * x.powi(3))).tanh())
            }
            ActivationFunction::Swish => x / (1.0 + E.powf(-x)),
        }
    }

    /// Element-wise derivative of the activation.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::Identity => 1.0,
            ActivationFunction::LeakyReLU { alpha } => if x > 0.0 { 1.0 } else { *alpha },
            ActivationFunction::Elu { alpha } => {
                if x > 0.0 { 1.0 } else { alpha * E.powf(x) }
            }
            ActivationFunction::Gelu => {
                let c = (2.0_f64 / PI).sqrt();
                let inner = c * (x + 0.044715 * x.powi(3));
                let tanh_inner = inner.tanh();
                let sech2 = 1.0 - tanh_inner * tanh_inner;
                let d_inner = c * (1.0 + 3.0 * 0.044715 * x.powi(2));
                0.5 * tanh_inner + 0.5 * x * sech2 * d_inner + 0.5
            }
            ActivationFunction::Swish => {
                let sig = 1.0 / (1.0 + E.powf(-x));
                sig + x * sig * (1.0 - sig)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lookup_fails_closed() {
        assert!(ActivationFunction::from_name("relu").is_ok());
        assert!(ActivationFunction::from_name("linear").is_ok());
        assert_eq!(
            ActivationFunction::from_name("softplus"),
            Err(Error::UnknownActivation { name: "softplus".to_owned() })
        );
        // Names are case-sensitive on the wire.
        assert!(ActivationFunction::from_name("ReLU").is_err());
    }

    #[test]
    fn sigmoid_midpoint() {
        let s = ActivationFunction::Sigmoid;
        assert!((s.function(0.0) - 0.5).abs() < 1e-12);
        assert!((s.derivative(0.0) - 0.25).abs() < 1e-12);
    }
}
