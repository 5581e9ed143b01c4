use std::io::{self, Write};

use env_logger::Env;
use perceptron_demo::data::builtin_scenarios;
use perceptron_demo::demo::{run_case, write_banner};
use perceptron_demo::TrainConfig;

// Command-line arguments are ignored; the six demo scenarios always run with
// the default configuration.
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = TrainConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = write_banner(&mut out, &config) {
        log::error!("failed to write banner: {e}");
    }

    let scenarios = match builtin_scenarios() {
        Ok(scenarios) => scenarios,
        Err(e) => {
            log::error!("invalid built-in scenario: {e}");
            return;
        }
    };

    for scenario in &scenarios {
        if let Err(e) = run_case(scenario, &config, &mut out) {
            log::error!("scenario {:?} failed: {e}", scenario.name());
        }
    }

    if let Err(e) = out.flush() {
        log::error!("failed to flush output: {e}");
    }
}
