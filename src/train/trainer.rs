use crate::loss::loss_type::LossType;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::optimizer::Optimizer;
use crate::truth::table::TruthTable;

/// Trains `network` on the full truth table for exactly `epochs` passes and
/// returns the mean loss of the last completed epoch (0.0 when `epochs` is
/// 0, which legally yields an untrained model).
///
/// The batch is always the whole table: gradients are accumulated over
/// every row, averaged, and applied as one optimizer step per epoch. There
/// is no shuffling, no early stopping, and no NaN detection: a numerically
/// unstable run trains to completion and produces a degenerate model.
pub fn train_network(
    network: &mut Network,
    table: &TruthTable,
    optimizer: &mut Optimizer,
    loss_type: LossType,
    epochs: usize,
) -> f64 {
    let n = table.len();
    let mut last_loss = 0.0;

    for _ in 0..epochs {
        let mut total_loss = 0.0;

        // Zero-initialize accumulated gradient storage.
        let mut acc_grads: Vec<(Matrix, Matrix)> = network.layers.iter()
            .map(|layer| (
                Matrix::zeros(layer.weights.rows, layer.weights.cols),
                Matrix::zeros(layer.biases.rows, layer.biases.cols),
            ))
            .collect();

        for (input, &target) in table.inputs.iter().zip(table.outputs.iter()) {
            let expected = [target];

            let output = network.forward(input.clone());

            total_loss += loss_type.loss(&output, &expected);

            // Initial delta: ∂L/∂a_output (error in output activation space)
            let error = loss_type.derivative(&output, &expected);
            let mut delta = Matrix::from_data(vec![error]);

            // Backward pass.
            for i in (0..network.layers.len()).rev() {
                let input_for_layer = if i == 0 {
                    Matrix::from_data(vec![input.clone()])
                } else {
                    network.layers[i - 1].neurons.clone()
                };

                let (w_grad, b_grad) = network.layers[i].compute_gradients(
                    delta.clone(),
                    &input_for_layer,
                );

                if i > 0 {
                    // Propagate δ_i through weights to get ∂L/∂a_{i-1}
                    delta = b_grad.clone() * network.layers[i].weights.transpose();
                }

                acc_grads[i].0 = acc_grads[i].0.clone() + w_grad;
                acc_grads[i].1 = acc_grads[i].1.clone() + b_grad;
            }
        }

        // Average over the table and apply one step.
        let inv_batch = 1.0 / n as f64;
        let avg_grads: Vec<(Matrix, Matrix)> = acc_grads
            .into_iter()
            .map(|(w_acc, b_acc)| (w_acc.map(|x| x * inv_batch), b_acc.map(|x| x * inv_batch)))
            .collect();
        optimizer.step(&mut network.layers, avg_grads);

        last_loss = total_loss / n as f64;
    }

    last_loss
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::spec::LayerSpec;

    fn sigmoid_net(sizes: &[usize]) -> Network {
        let specs: Vec<LayerSpec> = sizes.iter()
            .map(|&s| LayerSpec { output_neurons: s, activation: "sigmoid".to_owned() })
            .collect();
        Network::from_spec(&specs, 2).unwrap()
    }

    #[test]
    fn zero_epochs_leaves_weights_untouched() {
        let table = TruthTable::generate(2, "X1 and X2").unwrap();
        let mut network = sigmoid_net(&[1]);
        let before = network.layers[0].weights.clone();

        let mut optimizer = Optimizer::from_name("sgd", 0.5).unwrap();
        let loss = train_network(&mut network, &table, &mut optimizer, LossType::Mse, 0);

        assert_eq!(loss, 0.0);
        assert_eq!(network.layers[0].weights, before);
    }

    #[test]
    fn and_gate_converges_with_sgd() {
        let table = TruthTable::generate(2, "X1 and X2").unwrap();
        let mut network = sigmoid_net(&[1]);
        let mut optimizer = Optimizer::from_name("sgd", 1.0).unwrap();

        let loss = train_network(
            &mut network,
            &table,
            &mut optimizer,
            LossType::BinaryCrossEntropy,
            2000,
        );

        assert!(loss < 0.2, "final loss {loss} did not come down");
        let high = network.forward(vec![1.0, 1.0])[0];
        let low = network.forward(vec![0.0, 1.0])[0];
        assert!(high > 0.5, "AND(1,1) predicted {high}");
        assert!(low < 0.5, "AND(0,1) predicted {low}");
    }

    #[test]
    fn adam_reduces_loss_on_xor() {
        let table = TruthTable::generate(2, "X1 xor X2").unwrap();
        let mut network = sigmoid_net(&[4, 1]);
        let mut optimizer = Optimizer::from_name("adam", 0.05).unwrap();

        let early = train_network(&mut network, &table, &mut optimizer, LossType::Mse, 1);
        let late = train_network(&mut network, &table, &mut optimizer, LossType::Mse, 3000);
        assert!(
            late < early,
            "loss went from {early} to {late} after 3000 adam epochs"
        );
    }
}
