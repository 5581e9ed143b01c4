use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::perceptron::perceptron::Perceptron;

/// Hyperparameters for one training run.
///
/// # Fields
/// - `epochs`        — full passes over the training data
/// - `learning_rate` — step size of the delta rule
/// - `activation`    — activation of the perceptron being trained
/// - `seed`          — seeds the initial weights; `None` uses the thread RNG
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub activation: ActivationFunction,
    pub seed: Option<u64>,
}

impl TrainConfig {
    pub const DEFAULT_EPOCHS: usize = 15;
    pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

    pub fn new(epochs: usize, learning_rate: f64, activation: ActivationFunction) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            activation,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates an untrained perceptron for `input_size` features.
    pub fn build(&self, input_size: usize) -> Result<Perceptron> {
        match self.seed {
            Some(seed) => Perceptron::with_rng(
                input_size,
                self.activation,
                self.learning_rate,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => Perceptron::new(input_size, self.activation, self.learning_rate),
        }
    }
}

impl Default for TrainConfig {
    /// 15 epochs of step-activated training at learning rate 0.1.
    fn default() -> Self {
        TrainConfig::new(
            TrainConfig::DEFAULT_EPOCHS,
            TrainConfig::DEFAULT_LEARNING_RATE,
            ActivationFunction::Step,
        )
    }
}
