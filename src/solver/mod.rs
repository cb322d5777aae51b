mod config;
mod core;
mod errors;
mod operator;
mod outcome;
mod provenance;
mod reconstruct;
mod search;

pub use config::SolverConfig;
pub use core::ExpressionSolver;
pub use errors::SolverError;
pub use operator::Operator;
pub use outcome::{SearchOutcome, SearchStats, Solution};
pub use provenance::Provenance;
