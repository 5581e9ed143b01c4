use crate::data::scenario::Scenario;
use crate::error::Result;

fn logic_gate_inputs() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ]
}

/// Scalar-feature datasets are written as one value per example.
fn column(values: &[f64]) -> Vec<Vec<f64>> {
    values.iter().map(|&v| vec![v]).collect()
}

pub fn and() -> Result<Scenario> {
    Scenario::new(
        "AND",
        "The output is 1 ONLY when both inputs are 1.",
        logic_gate_inputs(),
        vec![0.0, 0.0, 0.0, 1.0],
    )
}

pub fn or() -> Result<Scenario> {
    Scenario::new(
        "OR",
        "The output is 1 when at least one of the inputs is 1.",
        logic_gate_inputs(),
        vec![0.0, 1.0, 1.0, 1.0],
    )
}

/// Two keyword-presence flags per e-mail.
pub fn spam() -> Result<Scenario> {
    Scenario::new(
        "Spam",
        "Simple example: an e-mail containing certain keywords is SPAM (1), otherwise Not Spam (0).",
        vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
        ],
        vec![1.0, 1.0, 1.0, 0.0],
    )
}

pub fn weather() -> Result<Scenario> {
    Scenario::new(
        "Weather",
        "High values = sunny day (1), low values = rainy day (0).",
        column(&[30.0, 10.0, 20.0, 35.0]),
        vec![1.0, 0.0, 0.0, 1.0],
    )
}

/// Transaction amounts.
pub fn fraud() -> Result<Scenario> {
    Scenario::new(
        "Fraud",
        "Very large transactions may indicate fraud (1), small amounts are normal (0).",
        column(&[1000.0, 50.0, 2000.0, 10.0]),
        vec![1.0, 0.0, 1.0, 0.0],
    )
}

/// Weekly study hours.
pub fn academic_risk() -> Result<Scenario> {
    Scenario::new(
        "Academic Risk",
        "Few study hours = at risk (1), many hours = low risk (0).",
        column(&[8.0, 4.0, 6.0, 2.0]),
        vec![0.0, 1.0, 0.0, 1.0],
    )
}

/// The six demo scenarios in presentation order.
pub fn builtin_scenarios() -> Result<Vec<Scenario>> {
    Ok(vec![and()?, or()?, spam()?, weather()?, fraud()?, academic_risk()?])
}
