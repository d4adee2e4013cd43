use serde::{Deserialize, Serialize};

/// One entry of the declarative `network_structure` list in a train
/// request.
///
/// The activation is carried as its wire name and only resolved (and
/// validated) when the network is built, so a typo fails the build rather
/// than the parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Number of neurons this layer outputs; the JSON key is camelCase to
    /// match the frontend payload.
    #[serde(rename = "outputNeurons")]
    pub output_neurons: usize,
    /// Activation function name, e.g. "relu" or "sigmoid".
    pub activation: String,
}
