use env_logger::Env;
use perceptron_demo::data::normalize_max_abs;
use perceptron_demo::train::{classify, evaluate};
use perceptron_demo::{ActivationFunction, Perceptron};

// failed courses, attendance %, grade average (0..20)
const STUDENTS: [[f64; 3]; 12] = [
    [0.0, 95.0, 16.0],
    [1.0, 90.0, 14.0],
    [4.0, 60.0, 9.0],
    [5.0, 50.0, 8.0],
    [2.0, 75.0, 12.0],
    [3.0, 65.0, 11.0],
    [0.0, 85.0, 18.0],
    [6.0, 40.0, 6.0],
    [1.0, 72.0, 10.0],
    [0.0, 98.0, 19.0],
    [2.0, 68.0, 9.0],
    [3.0, 80.0, 13.0],
];

fn at_risk(student: &[f64; 3]) -> f64 {
    let [failed, attendance, average] = *student;
    if failed >= 4.0 || average < 10.0 || attendance < 70.0 { 1.0 } else { 0.0 }
}

fn main() -> perceptron_demo::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let raw: Vec<Vec<f64>> = STUDENTS.iter().map(|s| s.to_vec()).collect();
    let labels: Vec<f64> = STUDENTS.iter().map(at_risk).collect();
    let inputs = normalize_max_abs(&raw);

    println!("Dataset (normalized):");
    for (i, (x, y)) in inputs.iter().zip(&labels).enumerate() {
        println!("{i} {x:.3?} => {y}");
    }

    for activation in ActivationFunction::ALL {
        println!("\n==============================");
        println!("Activation: {activation}");
        println!("==============================");

        let mut perceptron = Perceptron::new(inputs[0].len(), activation, 0.1)?;
        perceptron.train(&inputs, &labels, 20)?;
        println!("Weights: {:.4?} Bias: {:.4}", perceptron.weights(), perceptron.bias());

        for ((x, original), y) in inputs.iter().zip(&raw).zip(&labels) {
            let output = perceptron.predict(x)?;
            println!(
                "Input(orig) {original:?} -> output: {output:.4} -> class({}) (expected: {y})",
                classify(output, activation)
            );
        }

        let evaluation = evaluate(&perceptron, &inputs, &labels)?;
        println!("Accuracy (training set): {:.1}%", evaluation.accuracy() * 100.0);
    }

    Ok(())
}
