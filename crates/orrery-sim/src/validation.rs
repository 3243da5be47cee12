//! Invariant validation over a time range
//!
//! The engine has no external ephemeris to compare against, so the sweep
//! checks its own contract instead: Kepler-equation residuals, radius
//! bounds, and parent/child composition consistency.

use crate::kepler;
use crate::system::SolarSystem;
use anyhow::{bail, Context, Result};
use orrery_core::coordinates::Position;

/// Validation result for a single body at one timestamp
#[derive(Debug)]
pub struct ValidationPoint {
    pub body: String,
    pub simulated_seconds: f64,
    /// |E - e·sin(E) - M| at the solved eccentric anomaly
    pub kepler_residual: f64,
    /// Distance outside [a(1-e), a(1+e)], zero when in bounds
    pub radius_excess: f64,
    /// |position - parent position - local offset|
    pub composition_error: f64,
}

/// Check one body against the engine invariants.
///
/// The system must already have been advanced to `simulated_seconds`.
pub fn validate_body(
    system: &SolarSystem,
    index: usize,
    simulated_seconds: f64,
    speed_factor: f64,
) -> Result<ValidationPoint> {
    let body = system
        .body(index)
        .with_context(|| format!("no body at index {index}"))?;
    let elements = body.elements();

    let mean_anomaly = elements.mean_anomaly_rate * simulated_seconds * speed_factor;
    let ea = kepler::eccentric_anomaly(elements.eccentricity, mean_anomaly)
        .with_context(|| format!("solver failed for '{}'", elements.name))?;

    let kepler_residual = (ea - elements.eccentricity * ea.sin() - mean_anomaly).abs();

    let r = kepler::radius(elements.semi_major_axis, elements.eccentricity, ea);
    let lo = elements.semi_major_axis * (1.0 - elements.eccentricity);
    let hi = elements.semi_major_axis * (1.0 + elements.eccentricity);
    let radius_excess = (lo - r).max(0.0) + (r - hi).max(0.0);

    let parent_position = match body.parent() {
        Some(parent) => system
            .body(parent)
            .with_context(|| format!("missing parent {parent} for body {index}"))?
            .position(),
        None => Position::ORIGIN,
    };
    let local = elements.local_offset(simulated_seconds, speed_factor)?;
    let expected = parent_position + Position::new(local.x, local.y, local.z);
    let composition_error = body.position().distance(expected);

    Ok(ValidationPoint {
        body: elements.name.clone(),
        simulated_seconds,
        kepler_residual,
        radius_excess,
        composition_error,
    })
}

/// Sweep all bodies over a time range, advancing the system at each step
pub fn validate_range(
    system: &mut SolarSystem,
    start_seconds: f64,
    end_seconds: f64,
    step_seconds: f64,
    speed_factor: f64,
) -> Result<Vec<ValidationPoint>> {
    if step_seconds <= 0.0 {
        bail!("step must be positive, got {step_seconds}");
    }

    let mut results = Vec::new();
    let mut t = start_seconds;

    while t <= end_seconds {
        system
            .advance(t, speed_factor)
            .with_context(|| format!("advance failed at t={t}"))?;

        for index in 0..system.len() {
            results.push(validate_body(system, index, t, speed_factor)?);
        }
        t += step_seconds;
    }

    Ok(results)
}

/// Summary statistics for validation
#[derive(Debug)]
pub struct ValidationSummary {
    pub body: String,
    pub num_points: usize,
    pub mean_kepler_residual: f64,
    pub max_kepler_residual: f64,
    pub max_radius_excess: f64,
    pub max_composition_error: f64,
}

/// Compute summary statistics per body
pub fn summarize_validation(results: &[ValidationPoint]) -> Vec<ValidationSummary> {
    use std::collections::HashMap;

    let mut by_body: HashMap<&str, Vec<&ValidationPoint>> = HashMap::new();

    for point in results {
        by_body.entry(&point.body).or_default().push(point);
    }

    let mut summaries: Vec<ValidationSummary> = by_body
        .into_iter()
        .map(|(body, points)| {
            let n = points.len();
            let mean = points.iter().map(|p| p.kepler_residual).sum::<f64>() / n as f64;
            let max = points.iter().map(|p| p.kepler_residual).fold(0.0, f64::max);
            let max_radius = points.iter().map(|p| p.radius_excess).fold(0.0, f64::max);
            let max_comp = points
                .iter()
                .map(|p| p.composition_error)
                .fold(0.0, f64::max);

            ValidationSummary {
                body: body.to_string(),
                num_points: n,
                mean_kepler_residual: mean,
                max_kepler_residual: max,
                max_radius_excess: max_radius,
                max_composition_error: max_comp,
            }
        })
        .collect();

    summaries.sort_by(|a, b| a.body.cmp(&b.body));
    summaries
}
