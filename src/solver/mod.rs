pub mod case;
pub mod session;

#[cfg(test)]
mod case_test;

pub use case::{partitioned_cases, sweep_cases, Case, Parameter, MAX_CASES_PER_RUN};
pub use session::{
    CaseResult, Solver, SolverConfig, SolverError, SolverResults, StabilityDerivatives, Totals,
};
