pub mod adam;
pub mod optimizer;
pub mod rmsprop;
pub mod sgd;

pub use adam::Adam;
pub use optimizer::Optimizer;
pub use rmsprop::RmsProp;
pub use sgd::Sgd;
