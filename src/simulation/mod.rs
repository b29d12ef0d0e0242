use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};

use sat_config::{ConfigError, SimulationConfig};
use sat_core::constants::R_EARTH;
use sat_core::time::{seconds_to_hours, seconds_to_minutes};
use sat_core::units::m_to_km;
use sat_export::summary::{RunSummary, write_summary};
use sat_export::trajectory::{write_position, writer_for_path};
use sat_propagator::{OrbitState, PropagationError, PropagationSettings, propagate};

/// Relative specific-energy drift above which a run is flagged.
pub const ENERGY_DRIFT_WARN: f64 = 1e-6;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Propagation(#[from] PropagationError),
}

/// Propagate the configured orbit and write one `x y z` line per step.
///
/// The trajectory file is opened (truncated) before the loop and flushed after it;
/// a JSON summary is written too when `config.summary` is set.
pub fn run(config: &SimulationConfig) -> Result<RunSummary, SimulationError> {
    config.validate()?;

    let (position, velocity) = config.initial_state_vectors();
    let mut state = OrbitState::new(position, velocity);
    let settings = PropagationSettings {
        time_step_s: config.time_step_s,
        steps: config.steps,
    };

    info!(
        altitude_km = config.altitude_km,
        speed_m_s = config.speed_m_s,
        time_step_s = config.time_step_s,
        steps = config.steps,
        output = %config.output.display(),
        "starting trajectory simulation"
    );

    let io_error = |source: io::Error| SimulationError::Io {
        path: config.output.clone(),
        source,
    };

    let mut writer = writer_for_path(&config.output).map_err(io_error)?;
    let outcome = propagate(&mut state, &settings, |_, s| {
        write_position(&mut *writer, &s.position)
    });
    let propagated = match outcome {
        Ok(summary) => summary,
        Err(PropagationError::Sink(source)) => return Err(io_error(source)),
        Err(err) => return Err(err.into()),
    };
    writer.flush().map_err(io_error)?;
    drop(writer);

    if let Some(period) = propagated.period_estimate_s {
        debug!(
            period_min = seconds_to_minutes(period),
            orbits = propagated.elapsed_s / period,
            "bound orbit"
        );
    }
    if propagated.max_relative_energy_drift > ENERGY_DRIFT_WARN {
        warn!(
            drift = propagated.max_relative_energy_drift,
            threshold = ENERGY_DRIFT_WARN,
            "specific energy drifted beyond threshold; consider a smaller time step"
        );
    }

    let summary = RunSummary {
        trajectory_path: config.output.display().to_string(),
        steps: propagated.steps,
        time_step_s: propagated.time_step_s,
        elapsed_s: propagated.elapsed_s,
        initial_energy_j_kg: propagated.initial_energy_j_kg,
        final_energy_j_kg: propagated.final_energy_j_kg,
        max_relative_energy_drift: propagated.max_relative_energy_drift,
        min_altitude_km: m_to_km(propagated.min_radius_m - R_EARTH),
        max_altitude_km: m_to_km(propagated.max_radius_m - R_EARTH),
        period_estimate_s: propagated.period_estimate_s,
        final_position_m: propagated.final_state.position,
        final_velocity_m_s: propagated.final_state.velocity,
    };

    if let Some(path) = &config.summary {
        write_summary(path, &summary).map_err(|source| SimulationError::Io {
            path: path.clone(),
            source,
        })?;
    }

    info!(
        steps = summary.steps,
        simulated_hours = seconds_to_hours(summary.elapsed_s),
        max_relative_energy_drift = summary.max_relative_energy_drift,
        "simulation finished"
    );
    Ok(summary)
}
