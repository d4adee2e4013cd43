pub mod activation;
pub mod error;
pub mod expr;
pub mod layers;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod pipeline;
pub mod train;
pub mod truth;
pub mod viz;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use error::{Error, Result};
pub use expr::Expr;
pub use layers::dense::Layer;
pub use loss::loss_type::LossType;
pub use math::matrix::Matrix;
pub use network::network::Network;
pub use network::spec::LayerSpec;
pub use optim::optimizer::Optimizer;
pub use pipeline::{run, TrainRequest, TrainResponse};
pub use train::trainer::train_network;
pub use truth::table::TruthTable;
pub use viz::scatter::{decision_surface, ScatterPoint};
