//! Kepler's equation and anomaly conversions

use crate::error::KeplerError;
use std::f64::consts::PI;

/// Accept the iterate once the Newton step falls below this
pub const CONVERGENCE_TOLERANCE: f64 = 1e-5;

/// Iteration bound; exceeding it is a `NonConvergence` error
pub const MAX_ITERATIONS: usize = 100;

/// Solve Kepler's equation `E - e·sin(E) = M` for the eccentric anomaly.
///
/// Newton-Raphson on the mod-2π-reduced mean anomaly, with the whole turns
/// restored on return so the result satisfies the equation for the
/// unreduced `M` even at large magnitudes. Converges for any `e` in
/// `[0, 1)` and finite `M`.
pub fn eccentric_anomaly(eccentricity: f64, mean_anomaly: f64) -> Result<f64, KeplerError> {
    let e = eccentricity;
    let m = normalize_angle(mean_anomaly);
    let turns = mean_anomaly - m;

    // E ≈ M is a good seed for low-to-moderate eccentricity; near-unity
    // eccentricities need π to keep Newton from overshooting.
    let mut ea = if e < 0.8 { m } else { PI };

    for _ in 0..MAX_ITERATIONS {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;

        if delta.abs() < CONVERGENCE_TOLERANCE {
            return Ok(ea + turns);
        }
    }

    Err(KeplerError::NonConvergence {
        iterations: MAX_ITERATIONS,
        eccentricity,
        mean_anomaly,
    })
}

/// True anomaly from eccentric anomaly, in `(-π, π]` modulo whole turns.
///
/// ν = 2·atan2(√(1+e)·sin(E/2), √(1-e)·cos(E/2))
pub fn true_anomaly(eccentricity: f64, eccentric_anomaly: f64) -> f64 {
    let e = eccentricity;
    let half = eccentric_anomaly / 2.0;

    2.0 * ((1.0 + e).sqrt() * half.sin()).atan2((1.0 - e).sqrt() * half.cos())
}

/// Distance from the focus at the given eccentric anomaly.
///
/// r = a·(1 - e·cos(E)), always within `[a(1-e), a(1+e)]`.
pub fn radius(semi_major_axis: f64, eccentricity: f64, eccentric_anomaly: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentric_anomaly.cos())
}

/// Normalize angle to [0, 2π)
fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % (2.0 * PI);
    if a < 0.0 {
        a += 2.0 * PI;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_circular_orbit_identity() {
        // e=0 means E=M exactly, whole turns included
        for m in [0.0, 0.5, 3.0, 7.0, -4.0, 123.456] {
            let ea = eccentric_anomaly(0.0, m).unwrap();
            assert!((ea - m).abs() < 1e-12, "E != M for e=0, M={m}");

            // ν agrees with M up to whole turns
            let nu = true_anomaly(0.0, ea);
            let wrapped = (nu - m).rem_euclid(TAU);
            assert!(
                wrapped < 1e-9 || (TAU - wrapped) < 1e-9,
                "ν != M (mod 2π) for e=0, M={m}"
            );
        }
    }

    #[test]
    fn test_residual_across_eccentricities() {
        // |E - e·sin(E) - M| must stay below 1e-4 for valid eccentricities,
        // including mean anomalies far outside [0, 2π)
        for e in [0.0, 0.1, 0.3, 0.6, 0.8, 0.9, 0.97] {
            for m in [-20.0, -3.0, 0.0, 0.3, 1.0, 2.5, 6.0, 100.0, 12345.678] {
                let ea = eccentric_anomaly(e, m).unwrap();
                let residual = (ea - e * ea.sin() - m).abs();
                assert!(residual < 1e-4, "residual {residual} for e={e}, M={m}");
            }
        }
    }

    #[test]
    fn test_perihelion_and_aphelion() {
        // At M=0, E=0; at M=π, E=π
        let ea = eccentric_anomaly(0.0167, 0.0).unwrap();
        assert!(ea.abs() < 1e-10);

        let ea = eccentric_anomaly(0.0167, PI).unwrap();
        assert!((ea - PI).abs() < 1e-10);
    }

    #[test]
    fn test_radius_bounds() {
        for e in [0.0, 0.2, 0.5, 0.9] {
            for m in [0.0, 1.0, 2.0, 4.0, 6.0] {
                let ea = eccentric_anomaly(e, m).unwrap();
                let r = radius(100.0, e, ea);
                assert!(
                    r >= 100.0 * (1.0 - e) - 1e-9 && r <= 100.0 * (1.0 + e) + 1e-9,
                    "r={r} outside bounds for e={e}"
                );
            }
        }
    }

    #[test]
    fn test_circular_radius_is_semi_major_axis() {
        let ea = eccentric_anomaly(0.0, 2.2).unwrap();
        assert!((radius(42.0, 0.0, ea) - 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_mean_anomaly_errors() {
        // A non-finite M can never meet the tolerance; the bounded loop
        // must surface the failure instead of spinning
        for m in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = eccentric_anomaly(0.3, m);
            assert!(
                matches!(result, Err(KeplerError::NonConvergence { iterations: 100, .. })),
                "expected NonConvergence for M={m}"
            );
        }
    }

    #[test]
    fn test_true_anomaly_range() {
        for e in [0.0, 0.3, 0.7] {
            for ea in [-3.0, -1.0, 0.0, 1.0, 3.0] {
                let nu = true_anomaly(e, ea);
                assert!(nu > -PI - 1e-12 && nu <= PI + 1e-12);
            }
        }
    }
}
