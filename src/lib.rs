//! Two-body satellite trajectory simulation about Earth.
//!
//! The workspace crates are re-exported here so front-ends only depend on this
//! facade: [`primitives`] holds the `Vector3` type and constants, [`orbits`] the gravity
//! model, [`propagator`] the Velocity-Verlet integrator and counted loop, and
//! [`simulation`] ties them to configuration and file output.

pub mod simulation;

pub use sat_config as config;
pub use sat_core as primitives;
pub use sat_export as export;
pub use sat_orbits as orbits;
pub use sat_propagator as propagator;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
