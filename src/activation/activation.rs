use std::f64::consts::E;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PerceptronError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationFunction {
    Linear,
    Step,
    Sigmoid,
    ReLU,
    Tanh,
    /// Softmax over a single output unit, which reduces to the sigmoid.
    Softmax,
}

impl ActivationFunction {
    /// Every activation, in the order the demos sweep them.
    pub const ALL: [ActivationFunction; 6] = [
        ActivationFunction::Step,
        ActivationFunction::Sigmoid,
        ActivationFunction::ReLU,
        ActivationFunction::Tanh,
        ActivationFunction::Linear,
        ActivationFunction::Softmax,
    ];

    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Linear => x,
            ActivationFunction::Step => if x >= 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Sigmoid | ActivationFunction::Softmax => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Linear => "linear",
            ActivationFunction::Step => "step",
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::Softmax => "softmax",
        }
    }

    /// Parses an activation name, falling back to `Linear` for anything
    /// unrecognised instead of failing.
    pub fn from_name_lenient(name: &str) -> ActivationFunction {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown activation {name:?}, falling back to linear");
            ActivationFunction::Linear
        })
    }
}

impl Default for ActivationFunction {
    fn default() -> Self {
        ActivationFunction::Step
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationFunction {
    type Err = PerceptronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivationFunction::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| PerceptronError::InvalidActivation(s.to_string()))
    }
}
