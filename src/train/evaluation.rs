use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::perceptron::perceptron::Perceptron;

/// Outcome of scoring a trained perceptron against labelled data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
}

impl Evaluation {
    /// Fraction of examples classified correctly, in [0, 1].
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }
}

/// Turns a raw activation output into a 0/1 class.
///
/// Step outputs are already binary and are truncated; every other activation
/// is thresholded at 0.5.
pub fn classify(output: f64, activation: ActivationFunction) -> u8 {
    match activation {
        ActivationFunction::Step => output.trunc() as u8,
        _ => u8::from(output >= 0.5),
    }
}

pub fn evaluate(perceptron: &Perceptron, inputs: &[Vec<f64>], labels: &[f64]) -> Result<Evaluation> {
    perceptron.check_dataset(inputs, labels)?;

    let mut correct = 0;
    for (x, &y) in inputs.iter().zip(labels) {
        let class = classify(perceptron.predict(x)?, perceptron.activation());
        if f64::from(class) == y {
            correct += 1;
        }
    }

    Ok(Evaluation {
        correct,
        total: inputs.len(),
    })
}
