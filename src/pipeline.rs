use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::loss::loss_type::LossType;
use crate::network::network::Network;
use crate::network::spec::LayerSpec;
use crate::optim::optimizer::Optimizer;
use crate::train::trainer::train_network;
use crate::truth::table::TruthTable;
use crate::viz::scatter::{decision_surface, ScatterPoint};

/// Body of `POST /train`, deserialized as-is from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainRequest {
    pub num_variables: usize,
    pub boolean_function: String,
    pub network_structure: Vec<LayerSpec>,
    pub epochs: usize,
    pub learning_rate: f64,
    pub optimizer: String,
    pub loss_function: String,
}

/// Successful response body of `POST /train`.
#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub scatter_plot: Vec<ScatterPoint>,
}

/// Runs one training request end to end: truth table → network build →
/// training → decision-surface sampling.
///
/// Everything is request-scoped. The truth table, the model, and the grid
/// live only for this call; nothing is cached or shared with concurrent
/// requests, and any stage error propagates untranslated to the caller.
pub fn run(request: &TrainRequest) -> Result<Vec<ScatterPoint>> {
    let table = TruthTable::generate(request.num_variables, &request.boolean_function)?;
    debug!(
        "truth table for {:?}: {} rows",
        request.boolean_function,
        table.len()
    );

    let mut network = Network::from_spec(&request.network_structure, request.num_variables)?;
    let mut optimizer = Optimizer::from_name(&request.optimizer, request.learning_rate)?;
    let loss = LossType::from_name(&request.loss_function)?;

    let final_loss = train_network(
        &mut network,
        &table,
        &mut optimizer,
        loss,
        request.epochs,
    );
    debug!("trained {} epochs, final loss {final_loss}", request.epochs);

    let surface = decision_surface(&mut network, request.num_variables);
    debug!("sampled {} surface points", surface.len());

    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn and_request() -> TrainRequest {
        TrainRequest {
            num_variables: 2,
            boolean_function: "X1 and X2".to_owned(),
            network_structure: vec![
                LayerSpec { output_neurons: 4, activation: "relu".to_owned() },
                LayerSpec { output_neurons: 1, activation: "sigmoid".to_owned() },
            ],
            epochs: 50,
            learning_rate: 0.01,
            optimizer: "adam".to_owned(),
            loss_function: "binary_crossentropy".to_owned(),
        }
    }

    #[test]
    fn end_to_end_and_gate() {
        let surface = run(&and_request()).unwrap();
        assert_eq!(surface.len(), 400);
        for point in &surface {
            assert!(point.x.is_finite());
            assert!(point.y.is_finite());
            assert!(point.z.is_finite());
        }
    }

    #[test]
    fn zero_epochs_still_produces_a_surface() {
        let mut request = and_request();
        request.epochs = 0;
        assert_eq!(run(&request).unwrap().len(), 400);
    }

    #[test]
    fn bad_expression_aborts_the_request() {
        let mut request = and_request();
        request.boolean_function = "X1 nand X2".to_owned();
        assert!(matches!(run(&request), Err(Error::ExprSyntax { .. })));
    }

    #[test]
    fn unknown_optimizer_aborts_before_training() {
        let mut request = and_request();
        request.optimizer = "lbfgs".to_owned();
        assert!(matches!(
            run(&request),
            Err(Error::UnknownOptimizer { name }) if name == "lbfgs"
        ));
    }

    #[test]
    fn request_json_round_trip() {
        let body = r#"{
            "num_variables": 2,
            "boolean_function": "X1 and X2",
            "network_structure": [
                {"outputNeurons": 4, "activation": "relu"},
                {"outputNeurons": 1, "activation": "sigmoid"}
            ],
            "epochs": 50,
            "learning_rate": 0.01,
            "optimizer": "adam",
            "loss_function": "binary_crossentropy"
        }"#;
        let request: TrainRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.network_structure.len(), 2);
        assert_eq!(request.network_structure[0].output_neurons, 4);
    }
}
