pub mod activation;
pub mod data;
pub mod demo;
pub mod error;
pub mod perceptron;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use data::scenario::Scenario;
pub use demo::runner::run_case;
pub use error::{PerceptronError, Result};
pub use perceptron::perceptron::Perceptron;
pub use train::train_config::TrainConfig;
