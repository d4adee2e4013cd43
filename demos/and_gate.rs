use boolnet::{train_network, LayerSpec, LossType, Network, Optimizer, TruthTable};

fn main() {
    let table = TruthTable::generate(2, "X1 and X2").unwrap();

    let mut network = Network::from_spec(
        &[
            LayerSpec { output_neurons: 4, activation: "relu".to_owned() },
            LayerSpec { output_neurons: 1, activation: "sigmoid".to_owned() },
        ],
        2,
    )
    .unwrap();

    let mut optimizer = Optimizer::from_name("adam", 0.05).unwrap();

    for round in 1..=10 {
        let loss = train_network(
            &mut network,
            &table,
            &mut optimizer,
            LossType::BinaryCrossEntropy,
            100,
        );
        println!("Epoch {}: loss = {loss:.6}", round * 100);
    }

    for input in &table.inputs {
        println!(
            "Input: {:?} -> Output: {:.4}",
            input,
            network.forward(input.clone())[0]
        );
    }
}
