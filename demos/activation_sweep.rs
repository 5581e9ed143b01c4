use env_logger::Env;
use perceptron_demo::{data::catalog, ActivationFunction, Perceptron};

fn main() -> perceptron_demo::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let or = catalog::or()?;

    for activation in ActivationFunction::ALL {
        println!("\n============================");
        println!("Activation function: {activation}");
        println!("============================");

        let mut perceptron = Perceptron::new(or.input_size(), activation, 0.1)?;
        perceptron.train(or.inputs(), or.labels(), 20)?;

        for input in or.inputs() {
            println!("Input {:?} -> Prediction: {}", input, perceptron.predict(input)?);
        }
    }

    Ok(())
}
