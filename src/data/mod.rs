pub mod catalog;
pub mod normalize;
pub mod scenario;

pub use catalog::builtin_scenarios;
pub use normalize::normalize_max_abs;
pub use scenario::Scenario;
