pub mod grid;
pub mod pca;
pub mod scatter;

pub use pca::Pca;
pub use scatter::{decision_surface, ScatterPoint};
