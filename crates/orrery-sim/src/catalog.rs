//! Built-in nine-body solar-system catalog
//!
//! Semi-major axes and radius offsets are tabulated in gigameters and
//! scaled down for the scene; anomaly offsets and rates are radians.

use crate::body::OrbitalElements;
use crate::error::BuildError;
use crate::system::SolarSystem;
use orrery_core::constants::DISTANCE_SCALE;

/// Display properties carried through to the presentation boundary;
/// never read by the propagation math
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Appearance {
    pub color: String,
    pub display_radius: f64,
}

/// One catalog row: elements, parent index, appearance
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CatalogEntry {
    pub elements: OrbitalElements,
    pub parent: Option<usize>,
    pub appearance: Appearance,
}

/// Indices into the catalog sequence
pub const SUN: usize = 0;
pub const MERCURY: usize = 1;
pub const VENUS: usize = 2;
pub const EARTH: usize = 3;
pub const MARS: usize = 4;
pub const JUPITER: usize = 5;
pub const SATURN: usize = 6;
pub const URANUS: usize = 7;
pub const NEPTUNE: usize = 8;

fn entry(
    semi_major_axis_gm: f64,
    color: &str,
    eccentricity: f64,
    true_anomaly_offset: f64,
    mean_anomaly_rate: f64,
    name: &str,
    parent: Option<usize>,
    display_radius: f64,
    radius_offset_gm: f64,
) -> CatalogEntry {
    CatalogEntry {
        elements: OrbitalElements::new(
            semi_major_axis_gm * DISTANCE_SCALE,
            eccentricity,
            0.0,
            true_anomaly_offset,
            mean_anomaly_rate,
            radius_offset_gm * DISTANCE_SCALE,
            name,
        ),
        parent,
        appearance: Appearance {
            color: color.to_string(),
            display_radius,
        },
    }
}

/// The Sun and the eight planets, parents before children
#[rustfmt::skip]
pub fn catalog() -> Vec<CatalogEntry> {
    vec![
        //           a (Gm)    color      e           F       M rate   name       parent     r    R (Gm)
        entry(        0.0,     "yellow",  0.0,        0.0,    0.0,     "Sun",     None,      8.0,    0.0),
        entry(   57.909176,    "gray",    0.20563069, 1.598,  2.0,     "Mercury", Some(SUN), 3.0,  55.78),
        entry(   108.20893,    "yellow",  0.00677323, 5.139,  1.5,     "Venus",   Some(SUN), 3.0,  107.9),
        entry(  149.597887,    "blue",    0.01671022, 0.1185, 1.0,     "Earth",   Some(SUN), 5.0,  147.1),
        entry(  227.936637,    "orange",  0.09341233, 0.8021, 0.5,     "Mars",    Some(SUN), 5.0,  212.2),
        entry(  778.412027,    "brown",   0.048498,   3.091,  0.2,     "Jupiter", Some(SUN), 20.0, 816.2),
        entry(     1429.39,    "yellow",  0.05555,    2.907,  0.1,     "Saturn",  Some(SUN), 20.0, 1503.0),
        entry(     2875.04,    "cyan",    0.046381,   3.685,  0.1,     "Uranus",  Some(SUN), 20.0, 2983.0),
        entry(     4504.45,    "blue",    0.009456,   5.104,  0.1,     "Neptune", Some(SUN), 20.0, 4481.0),
    ]
}

/// Build the validated registry for the built-in catalog
pub fn solar_system() -> Result<SolarSystem, BuildError> {
    SolarSystem::new(catalog().into_iter().map(|e| (e.elements, e.parent)).collect())
}
