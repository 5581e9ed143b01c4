use env_logger::Env;
use perceptron_demo::{ActivationFunction, Perceptron};

fn main() -> perceptron_demo::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    println!("=== Rain prediction with several activations ===");

    // Temperature in °C; 1 = rain, 0 = no rain.
    let inputs: Vec<Vec<f64>> = [10.0, 12.0, 28.0, 30.0, 18.0, 26.0].iter().map(|&t| vec![t]).collect();
    let labels = [1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
    let probes = [8.0, 14.0, 20.0, 27.0, 32.0];

    for activation in ActivationFunction::ALL {
        println!("\n--- Activation: {activation} ---");

        let mut perceptron = Perceptron::new(1, activation, 0.1)?;
        perceptron.train(&inputs, &labels, 20)?;

        for temp in probes {
            let output = perceptron.predict(&[temp])?;
            let verdict = if output >= 0.5 { "Rain" } else { "No rain" };
            println!("Temp {temp}°C -> {verdict} (Pred: {output:.2})");
        }
    }

    Ok(())
}
