use crate::error::{Error, Result};
use crate::loss::{BceLoss, HuberLoss, MaeLoss, MseLoss};

/// Selects which loss function the training loop uses.
///
/// - `Mse`                — Mean-squared error; pair with Identity or Sigmoid output.
/// - `BinaryCrossEntropy` — Binary cross-entropy; pair with Sigmoid output.
/// - `Mae`                — Mean absolute error; pair with Identity output.
/// - `Huber`              — Huber loss (δ=1.0); pair with Identity output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossType {
    Mse,
    BinaryCrossEntropy,
    Mae,
    Huber,
}

impl LossType {
    /// Resolves a wire-format loss name; unknown names fail before any
    /// epoch runs.
    pub fn from_name(name: &str) -> Result<LossType> {
        match name {
            "mse" | "mean_squared_error" => Ok(LossType::Mse),
            "binary_crossentropy" => Ok(LossType::BinaryCrossEntropy),
            "mae" | "mean_absolute_error" => Ok(LossType::Mae),
            "huber" => Ok(LossType::Huber),
            _ => Err(Error::UnknownLoss {
                name: name.to_owned(),
            }),
        }
    }

    /// Scalar loss for one sample.
    pub fn loss(&self, predicted: &[f64], expected: &[f64]) -> f64 {
        match self {
            LossType::Mse => MseLoss::loss(predicted, expected),
            LossType::BinaryCrossEntropy => BceLoss::loss(predicted, expected),
            LossType::Mae => MaeLoss::loss(predicted, expected),
            LossType::Huber => HuberLoss::loss(predicted, expected),
        }
    }

    /// Per-output gradient for one sample.
    pub fn derivative(&self, predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        match self {
            LossType::Mse => MseLoss::derivative(predicted, expected),
            LossType::BinaryCrossEntropy => BceLoss::derivative(predicted, expected),
            LossType::Mae => MaeLoss::derivative(predicted, expected),
            LossType::Huber => HuberLoss::derivative(predicted, expected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lookup_fails_closed() {
        assert_eq!(LossType::from_name("mse"), Ok(LossType::Mse));
        assert_eq!(
            LossType::from_name("binary_crossentropy"),
            Ok(LossType::BinaryCrossEntropy)
        );
        assert_eq!(
            LossType::from_name("categorical_hinge"),
            Err(Error::UnknownLoss { name: "categorical_hinge".to_owned() })
        );
    }

    #[test]
    fn perfect_prediction_is_near_zero_loss() {
        for loss in [LossType::Mse, LossType::Mae, LossType::Huber] {
            assert!(loss.loss(&[1.0], &[1.0]).abs() < 1e-9);
        }
        // BCE keeps an epsilon away from log(0).
        assert!(LossType::BinaryCrossEntropy.loss(&[1.0], &[1.0]) < 1e-9);
    }
}
