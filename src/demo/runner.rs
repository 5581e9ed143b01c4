use std::io::Write;

use crate::data::scenario::Scenario;
use crate::error::Result;
use crate::train::evaluation::{evaluate, Evaluation};
use crate::train::train_config::TrainConfig;

/// One printed row: the example, its label and the displayed prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRow {
    pub inputs: Vec<f64>,
    pub expected: i64,
    pub predicted: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    pub name: String,
    pub rows: Vec<CaseRow>,
    pub evaluation: Evaluation,
}

/// Prints the title block shown before the scenarios.
pub fn write_banner<W: Write>(out: &mut W, config: &TrainConfig) -> Result<()> {
    writeln!(out, "=== Simple Perceptron in Rust ===")?;
    writeln!(out, "Activation function used: {}", config.activation.name().to_uppercase())?;
    writeln!(out, "Training on several practical cases.")?;
    Ok(())
}

/// Formats an example as `<inputs> -> <expected> | <predicted>`.
pub fn format_row(row: &CaseRow) -> String {
    format!("{:?} -> {} | {}", row.inputs, row.expected, row.predicted)
}

/// Trains a fresh perceptron on `scenario` and writes its predictions to `out`.
pub fn run_case<W: Write>(scenario: &Scenario, config: &TrainConfig, out: &mut W) -> Result<CaseReport> {
    log::info!("training {:?} for {} epochs", scenario.name(), config.epochs);

    let mut perceptron = config.build(scenario.input_size())?;
    log::debug!("initial weights {:?}, bias {}", perceptron.weights(), perceptron.bias());

    perceptron.train(scenario.inputs(), scenario.labels(), config.epochs)?;
    log::debug!("learned weights {:?}, bias {}", perceptron.weights(), perceptron.bias());

    let rows = scenario
        .inputs()
        .iter()
        .zip(scenario.labels())
        .map(|(x, &y)| -> Result<CaseRow> {
            Ok(CaseRow {
                inputs: x.clone(),
                expected: y as i64,
                // Displayed by truncation toward zero, not rounding.
                predicted: perceptron.predict(x)?.trunc() as i64,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    writeln!(out, "\n=== Case: {} ===", scenario.name())?;
    writeln!(out, "Description: {}", scenario.description())?;
    writeln!(out, "Inputs -> Expected | Prediction")?;
    for row in &rows {
        writeln!(out, "{}", format_row(row))?;
    }

    let evaluation = evaluate(&perceptron, scenario.inputs(), scenario.labels())?;
    log::info!(
        "{:?}: {}/{} correct ({:.1}%)",
        scenario.name(),
        evaluation.correct,
        evaluation.total,
        evaluation.accuracy() * 100.0
    );

    Ok(CaseReport {
        name: scenario.name().to_string(),
        rows,
        evaluation,
    })
}
