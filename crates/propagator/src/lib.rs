//! Fixed-step propagation of a satellite about Earth.
//!
//! [`verlet::step`] is the single-step Velocity-Verlet update. [`propagate`] is the
//! counted driving loop: for each step it hands the current state to a recorder and
//! then advances the state in place, tracking specific-energy drift as it goes.

use thiserror::Error;
use tracing::debug;

use sat_core::constants::MU_EARTH;
use sat_core::vector::Vector3;

pub mod verlet {
    use sat_core::vector::Vector3;
    use sat_orbits::gravitational_acceleration;

    /// Advance `(position, velocity)` by one Velocity-Verlet step of `dt` seconds
    /// under Earth's gravity.
    ///
    /// No checks are made on `dt`; `dt == 0` returns the inputs unchanged.
    pub fn step(position: &Vector3, velocity: &Vector3, dt: f64) -> (Vector3, Vector3) {
        step_with(gravitational_acceleration, position, velocity, dt)
    }

    /// Velocity-Verlet step for an arbitrary acceleration field.
    pub fn step_with<F>(
        acceleration: F,
        position: &Vector3,
        velocity: &Vector3,
        dt: f64,
    ) -> (Vector3, Vector3)
    where
        F: Fn(&Vector3) -> Vector3,
    {
        let a0 = acceleration(position);
        let next_position = position
            .add(&velocity.scale(dt))
            .add(&a0.scale(dt * dt / 2.0));
        let a1 = acceleration(&next_position);
        let next_velocity = velocity.add(&a0.add(&a1).scale(dt / 2.0));
        (next_position, next_velocity)
    }
}

/// Position and velocity of the propagated body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub position: Vector3,
    pub velocity: Vector3,
}

impl OrbitState {
    pub fn new(position: Vector3, velocity: Vector3) -> Self {
        Self { position, velocity }
    }

    /// Apply one Verlet step in place.
    pub fn advance(&mut self, dt: f64) {
        let (position, velocity) = verlet::step(&self.position, &self.velocity, dt);
        self.position = position;
        self.velocity = velocity;
    }

    pub fn radius(&self) -> f64 {
        self.position.magnitude()
    }

    /// Specific mechanical energy about Earth (J/kg).
    pub fn specific_energy(&self) -> f64 {
        sat_orbits::specific_energy(&self.position, &self.velocity)
    }

    fn is_degenerate(&self) -> bool {
        let radius = self.radius();
        !(radius > 0.0 && radius.is_finite() && self.velocity.is_finite())
    }
}

/// Step size and count for a propagation run.
#[derive(Debug, Clone, Copy)]
pub struct PropagationSettings {
    pub time_step_s: f64,
    pub steps: usize,
}

/// Diagnostics gathered while propagating.
#[derive(Debug, Clone)]
pub struct PropagationSummary {
    pub steps: usize,
    pub time_step_s: f64,
    pub elapsed_s: f64,
    pub initial_energy_j_kg: f64,
    pub final_energy_j_kg: f64,
    pub max_relative_energy_drift: f64,
    pub min_radius_m: f64,
    pub max_radius_m: f64,
    pub period_estimate_s: Option<f64>,
    pub final_state: OrbitState,
}

#[derive(Debug, Error)]
pub enum PropagationError {
    #[error("state reached the central singularity at step {step} (|r| = {radius_m} m)")]
    Singularity { step: usize, radius_m: f64 },
    #[error("failed to record trajectory sample: {0}")]
    Sink(#[from] std::io::Error),
}

/// Run the counted loop: record the current state, then advance it by one step.
///
/// `record` receives the step index and the state *before* that step's update, so
/// the first call sees the initial conditions. `state` holds the post-loop state on
/// success.
pub fn propagate<F>(
    state: &mut OrbitState,
    settings: &PropagationSettings,
    mut record: F,
) -> Result<PropagationSummary, PropagationError>
where
    F: FnMut(usize, &OrbitState) -> std::io::Result<()>,
{
    if state.is_degenerate() {
        return Err(PropagationError::Singularity {
            step: 0,
            radius_m: state.radius(),
        });
    }

    let initial_energy = state.specific_energy();
    let period = sat_orbits::period_of_state(MU_EARTH, &state.position, &state.velocity);
    debug!(
        time_step_s = settings.time_step_s,
        steps = settings.steps,
        initial_energy_j_kg = initial_energy,
        period_s = ?period,
        "starting propagation"
    );

    let mut tracker = DriftTracker::new(initial_energy);
    for step in 0..settings.steps {
        tracker.observe(state);
        record(step, state)?;

        state.advance(settings.time_step_s);
        if state.is_degenerate() {
            return Err(PropagationError::Singularity {
                step: step + 1,
                radius_m: state.radius(),
            });
        }
    }
    tracker.observe(state);

    Ok(PropagationSummary {
        steps: settings.steps,
        time_step_s: settings.time_step_s,
        elapsed_s: settings.time_step_s * settings.steps as f64,
        initial_energy_j_kg: initial_energy,
        final_energy_j_kg: state.specific_energy(),
        max_relative_energy_drift: tracker.max_drift,
        min_radius_m: tracker.min_radius,
        max_radius_m: tracker.max_radius,
        period_estimate_s: period,
        final_state: *state,
    })
}

struct DriftTracker {
    reference: f64,
    max_drift: f64,
    min_radius: f64,
    max_radius: f64,
}

impl DriftTracker {
    fn new(reference: f64) -> Self {
        Self {
            reference,
            max_drift: 0.0,
            min_radius: f64::INFINITY,
            max_radius: 0.0,
        }
    }

    fn observe(&mut self, state: &OrbitState) {
        let delta = (state.specific_energy() - self.reference).abs();
        // fall back to absolute drift for a parabolic start
        let drift = if self.reference != 0.0 {
            delta / self.reference.abs()
        } else {
            delta
        };
        self.max_drift = self.max_drift.max(drift);
        let radius = state.radius();
        self.min_radius = self.min_radius.min(radius);
        self.max_radius = self.max_radius.max(radius);
    }
}
