//! Orbiting bodies and their Keplerian elements

use crate::error::KeplerError;
use crate::kepler;
use nalgebra::Vector3;
use orrery_core::coordinates::Position;

/// Fixed orbital elements of one body, immutable after creation
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis (scene length units)
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless, 0 = circular)
    pub eccentricity: f64,
    /// Orbital-plane tilt (radians)
    pub inclination: f64,
    /// Constant offset added to the computed true anomaly (radians);
    /// captures orbital phase not covered by the time-based anomaly
    pub true_anomaly_offset: f64,
    /// Mean anomaly accrued per simulated second (radians)
    pub mean_anomaly_rate: f64,
    /// Constant distance added to the time-varying Kepler radius. Shifts
    /// the whole orbit outward by a fixed amount rather than scaling it;
    /// kept exactly as the source data defines it.
    pub radius_offset: f64,
    /// Display identifier, unused by the math
    pub name: String,
}

impl OrbitalElements {
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        true_anomaly_offset: f64,
        mean_anomaly_rate: f64,
        radius_offset: f64,
        name: impl Into<String>,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            true_anomaly_offset,
            mean_anomaly_rate,
            radius_offset,
            name: name.into(),
        }
    }

    /// Offset from the parent at the given simulated time.
    ///
    /// M = rate·t·speed, solved to E, converted to ν and r, laid out in
    /// the orbital plane and tilted by the inclination.
    pub fn local_offset(
        &self,
        simulated_seconds: f64,
        speed_factor: f64,
    ) -> Result<Vector3<f64>, KeplerError> {
        let mean_anomaly = self.mean_anomaly_rate * simulated_seconds * speed_factor;
        let ea = kepler::eccentric_anomaly(self.eccentricity, mean_anomaly)?;
        let nu = kepler::true_anomaly(self.eccentricity, ea) + self.true_anomaly_offset;
        let r = kepler::radius(self.semi_major_axis, self.eccentricity, ea) + self.radius_offset;

        let planar_x = r * nu.cos();
        let planar_y = r * nu.sin();

        Ok(Vector3::new(
            planar_x * self.inclination.cos(),
            planar_y,
            planar_x * self.inclination.sin(),
        ))
    }
}

/// One body in the registry: elements, a non-owning parent handle, and the
/// position recomputed every tick
#[derive(Clone, Debug)]
pub struct OrbitingBody {
    elements: OrbitalElements,
    /// Index of the parent in the registry sequence; None for roots
    parent: Option<usize>,
    position: Position,
}

impl OrbitingBody {
    pub(crate) fn new(elements: OrbitalElements, parent: Option<usize>) -> Self {
        Self {
            elements,
            parent,
            position: Position::ORIGIN,
        }
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn name(&self) -> &str {
        &self.elements.name
    }

    /// Absolute position as of the last tick
    pub fn position(&self) -> Position {
        self.position
    }

    /// Recompute and store the absolute position for this tick.
    ///
    /// The caller must pass the parent's position for the *same*
    /// timestamp; the registry's ordering guarantees the parent was
    /// updated first. On solver failure the stored position is left at
    /// its last-known-good value.
    pub fn update_position(
        &mut self,
        parent_position: Position,
        simulated_seconds: f64,
        speed_factor: f64,
    ) -> Result<Position, KeplerError> {
        let local = self.elements.local_offset(simulated_seconds, speed_factor)?;
        self.position = parent_position + Position::new(local.x, local.y, local.z);
        Ok(self.position)
    }
}
