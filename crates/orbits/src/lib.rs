//! Two-body orbit helpers: inverse-square gravity and vis-viva quantities.
use std::f64::consts::PI;

use sat_core::constants::MU_EARTH;
use sat_core::vector::Vector3;

/// Earth's gravitational acceleration at `position` (m/s²), pointing toward the origin.
///
/// No guard is applied at `|position| == 0`; the result is then non-finite.
pub fn gravitational_acceleration(position: &Vector3) -> Vector3 {
    gravitational_acceleration_with(MU_EARTH, position)
}

/// Inverse-square acceleration toward a central body with gravitational parameter `mu_m3_s2`.
pub fn gravitational_acceleration_with(mu_m3_s2: f64, position: &Vector3) -> Vector3 {
    let distance = position.magnitude();
    let magnitude = mu_m3_s2 / (distance * distance);
    position.scale(-magnitude / distance)
}

/// Specific mechanical energy `|v|²/2 - mu/|r|` (J/kg) about Earth.
pub fn specific_energy(position: &Vector3, velocity: &Vector3) -> f64 {
    specific_energy_with(MU_EARTH, position, velocity)
}

/// Specific mechanical energy about a central body with parameter `mu_m3_s2`.
pub fn specific_energy_with(mu_m3_s2: f64, position: &Vector3, velocity: &Vector3) -> f64 {
    0.5 * velocity.dot(velocity) - mu_m3_s2 / position.magnitude()
}

/// Semi-major axis from specific energy, `a = -mu / (2E)`.
/// Returns `None` for parabolic or hyperbolic (unbound) energies.
pub fn semi_major_axis(mu_m3_s2: f64, energy_j_kg: f64) -> Option<f64> {
    if energy_j_kg < 0.0 {
        Some(-mu_m3_s2 / (2.0 * energy_j_kg))
    } else {
        None
    }
}

/// Keplerian period for a bound orbit with semi-major axis `a_m`.
pub fn orbital_period(mu_m3_s2: f64, a_m: f64) -> f64 {
    2.0 * PI * (a_m * a_m * a_m / mu_m3_s2).sqrt()
}

/// Period of the orbit through the given state, if it is bound.
pub fn period_of_state(mu_m3_s2: f64, position: &Vector3, velocity: &Vector3) -> Option<f64> {
    let energy = specific_energy_with(mu_m3_s2, position, velocity);
    semi_major_axis(mu_m3_s2, energy).map(|a| orbital_period(mu_m3_s2, a))
}

/// Speed of a circular orbit at radius `r_m`.
pub fn circular_speed(mu_m3_s2: f64, r_m: f64) -> f64 {
    (mu_m3_s2 / r_m).sqrt()
}
