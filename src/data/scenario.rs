use crate::error::{PerceptronError, Result};

/// A named, labelled toy dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    name: String,
    description: String,
    inputs: Vec<Vec<f64>>,
    labels: Vec<f64>,
}

impl Scenario {
    /// Validates that there is at least one example, one label per input and
    /// that every input has the same non-zero width.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        inputs: Vec<Vec<f64>>,
        labels: Vec<f64>,
    ) -> Result<Scenario> {
        let width = match inputs.first() {
            Some(first) if !first.is_empty() => first.len(),
            Some(_) => return Err(PerceptronError::InvalidInputSize),
            None => return Err(PerceptronError::EmptyDataset),
        };
        if let Some(row) = inputs.iter().find(|row| row.len() != width) {
            return Err(PerceptronError::DimensionMismatch {
                expected: width,
                found: row.len(),
            });
        }
        if labels.len() != inputs.len() {
            return Err(PerceptronError::LabelCountMismatch {
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }

        Ok(Scenario {
            name: name.into(),
            description: description.into(),
            inputs,
            labels,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    pub fn input_size(&self) -> usize {
        self.inputs[0].len()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}
