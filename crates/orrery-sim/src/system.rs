//! Solar system registry and per-tick propagation

use crate::body::{OrbitalElements, OrbitingBody};
use crate::error::{BodyFailure, BuildError, TickError};
use orrery_core::coordinates::Position;

/// Ordered collection of orbiting bodies, advanced as a unit once per tick.
///
/// The sequence is topologically ordered: every body's parent appears
/// earlier, so a single forward pass updates parents before any child
/// reads their position.
pub struct SolarSystem {
    bodies: Vec<OrbitingBody>,
}

impl SolarSystem {
    /// Build a system from a declarative list of elements and parent
    /// indices.
    ///
    /// Rejects eccentricities outside `[0, 1)` and any parent index that
    /// does not strictly precede its body (which covers self-reference,
    /// cycles, and forward references in one rule).
    pub fn new(specs: Vec<(OrbitalElements, Option<usize>)>) -> Result<Self, BuildError> {
        for (index, (elements, parent)) in specs.iter().enumerate() {
            if !(0.0..1.0).contains(&elements.eccentricity) {
                return Err(BuildError::InvalidEccentricity {
                    name: elements.name.clone(),
                    value: elements.eccentricity,
                });
            }

            if let Some(parent) = *parent {
                if parent >= index {
                    return Err(BuildError::CyclicParentage {
                        body: index,
                        name: elements.name.clone(),
                        parent,
                    });
                }
            }
        }

        Ok(Self {
            bodies: specs
                .into_iter()
                .map(|(elements, parent)| OrbitingBody::new(elements, parent))
                .collect(),
        })
    }

    /// Advance every body to the given timestamp.
    ///
    /// Strictly sequential in declaration order; after the call every
    /// position reflects the same timestamp and every child is consistent
    /// with its parent. A body whose solver fails keeps its last-known-good
    /// position (its children compose against that stale value); the fault
    /// is logged, collected into the returned `TickError`, and never stops
    /// the remaining bodies from updating.
    pub fn advance(&mut self, simulated_seconds: f64, speed_factor: f64) -> Result<(), TickError> {
        let mut failures = Vec::new();

        for index in 0..self.bodies.len() {
            let parent_position = match self.bodies[index].parent() {
                Some(parent) => self.bodies[parent].position(),
                None => Position::ORIGIN,
            };

            if let Err(error) =
                self.bodies[index].update_position(parent_position, simulated_seconds, speed_factor)
            {
                tracing::warn!(
                    body = self.bodies[index].name(),
                    %error,
                    "body kept last-known-good position this tick"
                );
                failures.push(BodyFailure {
                    index,
                    name: self.bodies[index].name().to_string(),
                    error,
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(TickError {
                attempted: self.bodies.len(),
                failures,
            })
        }
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&OrbitingBody> {
        self.bodies.get(index)
    }

    /// Per-body `(name, position)` pairs for the presentation boundary
    pub fn positions(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.bodies.iter().map(|b| (b.name(), b.position()))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
