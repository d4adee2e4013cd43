use crate::activation::activation::ActivationFunction;
use crate::error::{Error, Result};
use crate::layers::dense::Layer;
use crate::network::spec::LayerSpec;

pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a freshly-initialized network from an ordered layer spec.
    ///
    /// The first layer's fan-in is `input_size` (the number of boolean
    /// variables); each subsequent layer is fully connected to its
    /// predecessor. Every call yields independent random weights; nothing
    /// is shared or reused across requests. An unknown activation name or
    /// an empty spec list fails construction.
    pub fn from_spec(specs: &[LayerSpec], input_size: usize) -> Result<Network> {
        if specs.is_empty() {
            return Err(Error::EmptyNetwork);
        }

        let mut layers = Vec::with_capacity(specs.len());
        let mut fan_in = input_size;
        for spec in specs {
            let activation = ActivationFunction::from_name(&spec.activation)?;
            layers.push(Layer::new(spec.output_neurons, fan_in, activation));
            fan_in = spec.output_neurons;
        }

        Ok(Network { layers })
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: Vec<f64>) -> Vec<f64> {
        let mut current = input;
        for layer in &mut self.layers {
            current = layer.feed_from(current);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(output_neurons: usize, activation: &str) -> LayerSpec {
        LayerSpec {
            output_neurons,
            activation: activation.to_owned(),
        }
    }

    #[test]
    fn layer_widths_thread_through() {
        let mut network =
            Network::from_spec(&[spec(4, "relu"), spec(1, "sigmoid")], 2).unwrap();
        assert_eq!(network.layers.len(), 2);
        assert_eq!(network.layers[0].weights.rows, 2);
        assert_eq!(network.layers[0].weights.cols, 4);
        assert_eq!(network.layers[1].weights.rows, 4);
        assert_eq!(network.layers[1].weights.cols, 1);

        let out = network.forward(vec![0.0, 1.0]);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_finite());
    }

    #[test]
    fn unknown_activation_fails_construction() {
        let result = Network::from_spec(&[spec(4, "relu"), spec(1, "sofmax")], 2);
        assert!(matches!(
            result,
            Err(Error::UnknownActivation { name }) if name == "sofmax"
        ));
    }

    #[test]
    fn empty_spec_is_a_configuration_error() {
        assert!(matches!(Network::from_spec(&[], 2), Err(Error::EmptyNetwork)));
    }

    #[test]
    fn each_build_gets_fresh_weights() {
        let a = Network::from_spec(&[spec(3, "sigmoid")], 2).unwrap();
        let b = Network::from_spec(&[spec(3, "sigmoid")], 2).unwrap();
        // 6 independent gaussian samples colliding exactly is impossible in
        // practice; equality would mean weights are being reused.
        assert_ne!(a.layers[0].weights, b.layers[0].weights);
    }
}
