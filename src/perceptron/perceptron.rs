use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::{PerceptronError, Result};

/// A single linear unit: weighted sum of the inputs plus a bias, passed
/// through an activation function.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: Vec<f64>,
    bias: f64,
    learning_rate: f64,
    activation: ActivationFunction,
}

impl Perceptron {
    /// Builds a perceptron with weights and bias drawn uniformly from
    /// [-1, 1) using the thread-local RNG.
    pub fn new(input_size: usize, activation: ActivationFunction, learning_rate: f64) -> Result<Perceptron> {
        Perceptron::with_rng(input_size, activation, learning_rate, &mut rand::thread_rng())
    }

    /// Same as [`Perceptron::new`] but draws the initial parameters from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        input_size: usize,
        activation: ActivationFunction,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Perceptron> {
        if input_size == 0 {
            return Err(PerceptronError::InvalidInputSize);
        }
        let weights = (0..input_size).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let bias = rng.gen_range(-1.0..1.0);

        Ok(Perceptron {
            weights,
            bias,
            learning_rate,
            activation,
        })
    }

    /// Builds a perceptron from known parameters.
    pub fn from_parts(
        weights: Vec<f64>,
        bias: f64,
        activation: ActivationFunction,
        learning_rate: f64,
    ) -> Result<Perceptron> {
        if weights.is_empty() {
            return Err(PerceptronError::InvalidInputSize);
        }
        Ok(Perceptron {
            weights,
            bias,
            learning_rate,
            activation,
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    pub fn activate(&self, x: f64) -> f64 {
        self.activation.function(x)
    }

    /// Weighted sum of `inputs` plus the bias, before activation.
    pub fn net_input(&self, inputs: &[f64]) -> Result<f64> {
        self.check_dimension(inputs)?;
        let sum: f64 = self.weights.iter().zip(inputs).map(|(w, x)| w * x).sum();
        Ok(sum + self.bias)
    }

    pub fn predict(&self, inputs: &[f64]) -> Result<f64> {
        Ok(self.activate(self.net_input(inputs)?))
    }

    /// Online perceptron learning: for every epoch, visits the examples in
    /// order and nudges weights and bias by `learning_rate * error`.
    ///
    /// All inputs are validated before the first update, so an error leaves
    /// the perceptron untouched.
    pub fn train(&mut self, inputs: &[Vec<f64>], labels: &[f64], epochs: usize) -> Result<()> {
        self.check_dataset(inputs, labels)?;

        for epoch in 0..epochs {
            let mut updates = 0;
            for (x, &y) in inputs.iter().zip(labels) {
                let error = y - self.predict(x)?;
                if error != 0.0 {
                    updates += 1;
                }
                for (w, xj) in self.weights.iter_mut().zip(x) {
                    *w += self.learning_rate * error * xj;
                }
                self.bias += self.learning_rate * error;
            }
            log::trace!("epoch {}/{}: {} of {} examples had non-zero error", epoch + 1, epochs, updates, inputs.len());
        }

        Ok(())
    }

    pub(crate) fn check_dataset(&self, inputs: &[Vec<f64>], labels: &[f64]) -> Result<()> {
        if inputs.len() != labels.len() {
            return Err(PerceptronError::LabelCountMismatch {
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }
        inputs.iter().try_for_each(|x| self.check_dimension(x))
    }

    fn check_dimension(&self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.weights.len() {
            return Err(PerceptronError::DimensionMismatch {
                expected: self.weights.len(),
                found: inputs.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn logic_inputs() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ]
    }

    fn zeroed(input_size: usize) -> Perceptron {
        Perceptron::from_parts(vec![0.0; input_size], 0.0, ActivationFunction::Step, 0.1).unwrap()
    }

    fn predictions(p: &Perceptron, inputs: &[Vec<f64>]) -> Vec<f64> {
        inputs.iter().map(|x| p.predict(x).unwrap()).collect()
    }

    #[test]
    fn initial_parameters_lie_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let p = Perceptron::with_rng(3, ActivationFunction::Step, 0.1, &mut rng).unwrap();
            assert_eq!(p.input_size(), 3);
            for &v in p.weights().iter().chain(std::iter::once(&p.bias())) {
                assert!((-1.0..1.0).contains(&v), "{v} out of range");
            }
        }
    }

    #[test]
    fn seeded_construction_is_reproducible() {
        let a = Perceptron::with_rng(4, ActivationFunction::Sigmoid, 0.1, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Perceptron::with_rng(4, ActivationFunction::Sigmoid, 0.1, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_inputs_rejected() {
        assert!(matches!(
            Perceptron::new(0, ActivationFunction::Step, 0.1),
            Err(PerceptronError::InvalidInputSize)
        ));
        assert!(matches!(
            Perceptron::from_parts(vec![], 0.0, ActivationFunction::Step, 0.1),
            Err(PerceptronError::InvalidInputSize)
        ));
    }

    #[test]
    fn predict_is_activated_weighted_sum() {
        let p = Perceptron::from_parts(vec![0.5, -2.0], 0.25, ActivationFunction::Linear, 0.1).unwrap();
        assert_eq!(p.net_input(&[2.0, 1.0]).unwrap(), -0.75);
        assert_eq!(p.predict(&[2.0, 1.0]).unwrap(), -0.75);

        let p = Perceptron::from_parts(vec![0.5, -2.0], 0.25, ActivationFunction::ReLU, 0.1).unwrap();
        assert_eq!(p.predict(&[2.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn single_update_follows_delta_rule() {
        let mut p = Perceptron::from_parts(vec![0.3, -0.6], 0.2, ActivationFunction::Linear, 0.1).unwrap();
        let x = vec![1.5, -2.0];
        let y = 1.0;

        let w_before = p.weights().to_vec();
        let b_before = p.bias();
        let error = y - p.predict(&x).unwrap();

        p.train(&[x.clone()], &[y], 1).unwrap();

        for j in 0..x.len() {
            assert_eq!(p.weights()[j], w_before[j] + 0.1 * error * x[j]);
        }
        assert_eq!(p.bias(), b_before + 0.1 * error);
    }

    #[test]
    fn zero_error_leaves_parameters_unchanged() {
        // Already separates AND.
        let mut p = Perceptron::from_parts(vec![1.0, 1.0], -1.5, ActivationFunction::Step, 0.1).unwrap();
        let inputs = logic_inputs();
        let labels = [0.0, 0.0, 0.0, 1.0];
        assert_eq!(predictions(&p, &inputs), labels);

        let before = p.clone();
        p.train(&inputs, &labels, 10).unwrap();
        assert_eq!(p, before);
    }

    #[test]
    fn predict_rejects_wrong_width() {
        let p = zeroed(2);
        match p.predict(&[1.0, 2.0, 3.0]) {
            Err(PerceptronError::DimensionMismatch { expected, found }) => {
                assert_eq!((expected, found), (2, 3));
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn train_rejects_wrong_width_without_mutating() {
        let mut p = Perceptron::from_parts(vec![0.4, -0.1], 0.3, ActivationFunction::Step, 0.1).unwrap();
        let before = p.clone();
        // The bad row comes last so a partial update would be visible.
        let inputs = vec![vec![0.0, 1.0], vec![1.0, 1.0], vec![1.0]];

        let err = p.train(&inputs, &[0.0, 1.0, 1.0], 5).unwrap_err();
        assert!(matches!(err, PerceptronError::DimensionMismatch { expected: 2, found: 1 }));
        assert_eq!(p, before);
    }

    #[test]
    fn train_rejects_label_count_mismatch() {
        let mut p = zeroed(2);
        let err = p.train(&logic_inputs(), &[0.0, 1.0], 1).unwrap_err();
        assert!(matches!(err, PerceptronError::LabelCountMismatch { inputs: 4, labels: 2 }));
        assert_eq!(p, zeroed(2));
    }

    #[test]
    fn empty_training_is_a_no_op() {
        let mut p = zeroed(2);
        p.train(&[], &[], 15).unwrap();
        p.train(&logic_inputs(), &[0.0, 1.0, 1.0, 1.0], 0).unwrap();
        assert_eq!(p, zeroed(2));
    }

    #[test]
    fn or_converges_from_zero_weights() {
        let mut p = zeroed(2);
        let inputs = logic_inputs();
        p.train(&inputs, &[0.0, 1.0, 1.0, 1.0], 15).unwrap();
        assert_eq!(predictions(&p, &inputs), vec![0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn and_converges_from_zero_weights() {
        let mut p = zeroed(2);
        let inputs = logic_inputs();
        p.train(&inputs, &[0.0, 0.0, 0.0, 1.0], 15).unwrap();
        assert_eq!(predictions(&p, &inputs), vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn step_outputs_stay_binary_for_random_starts() {
        let inputs = logic_inputs();
        for seed in 0..20 {
            let mut p = Perceptron::with_rng(2, ActivationFunction::Step, 0.1, &mut StdRng::seed_from_u64(seed)).unwrap();
            p.train(&inputs, &[0.0, 0.0, 0.0, 1.0], 15).unwrap();
            for out in predictions(&p, &inputs) {
                assert!(out == 0.0 || out == 1.0);
            }
        }
    }
}
