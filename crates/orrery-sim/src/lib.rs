//! Keplerian propagation engine for the orrery.
//!
//! Given a body's fixed orbital elements and a timestamp, computes its
//! position, composing children onto their (already updated) parents so
//! moons orbit planets orbiting the star. Driven from outside by any
//! fixed- or variable-timestep loop; `advance` is pure computation.

pub mod body;
pub mod catalog;
pub mod error;
pub mod kepler;
pub mod system;
pub mod time_controller;
pub mod validation;


pub use body::{OrbitalElements, OrbitingBody};
pub use catalog::{catalog, solar_system, Appearance, CatalogEntry};
pub use error::{BodyFailure, BuildError, KeplerError, TickError};
pub use system::SolarSystem;
pub use time_controller::{j2000, rates, TimeController};
pub use validation::{
    summarize_validation, validate_body, validate_range, ValidationPoint, ValidationSummary,
};
