use boolnet::{pipeline, LayerSpec, TrainRequest};

fn main() {
    let request = TrainRequest {
        num_variables: 3,
        boolean_function: "X1 xor X2 xor X3".to_owned(),
        network_structure: vec![
            LayerSpec { output_neurons: 8, activation: "relu".to_owned() },
            LayerSpec { output_neurons: 1, activation: "sigmoid".to_owned() },
        ],
        epochs: 500,
        learning_rate: 0.01,
        optimizer: "adam".to_owned(),
        loss_function: "binary_crossentropy".to_owned(),
    };

    let surface = pipeline::run(&request).unwrap();

    println!("{} surface points (projected from 3-D to 2-D)", surface.len());
    for point in surface.iter().take(5) {
        println!("x = {:+.4}  y = {:+.4}  z = {:.4}", point.x, point.y, point.z);
    }
}
