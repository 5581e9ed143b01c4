pub mod evaluation;
pub mod train_config;

pub use evaluation::{classify, evaluate, Evaluation};
pub use train_config::TrainConfig;
