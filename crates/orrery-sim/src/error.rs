//! Error types for system construction and propagation

use thiserror::Error;

/// Errors from the Kepler equation solver
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeplerError {
    #[error(
        "Kepler solver did not converge after {iterations} iterations \
         (e={eccentricity}, M={mean_anomaly})"
    )]
    NonConvergence {
        iterations: usize,
        eccentricity: f64,
        mean_anomaly: f64,
    },
}

/// Errors rejected eagerly when a system is constructed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("body '{name}': eccentricity {value} outside [0, 1)")]
    InvalidEccentricity { name: String, value: f64 },

    #[error(
        "body {body} ('{name}') lists parent {parent}, which does not \
         precede it in the sequence"
    )]
    CyclicParentage {
        body: usize,
        name: String,
        parent: usize,
    },
}

/// One body's solver fault during a tick
#[derive(Debug, Clone, PartialEq)]
pub struct BodyFailure {
    pub index: usize,
    pub name: String,
    pub error: KeplerError,
}

/// Per-body solver faults collected from a single `advance` call.
///
/// Every body is still attempted; the listed bodies kept their
/// last-known-good position.
#[derive(Error, Debug)]
#[error("{} of {attempted} bodies failed to converge this tick", .failures.len())]
pub struct TickError {
    pub attempted: usize,
    pub failures: Vec<BodyFailure>,
}
