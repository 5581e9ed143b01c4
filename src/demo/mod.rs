pub mod runner;

pub use runner::{format_row, run_case, write_banner, CaseReport, CaseRow};
