//! Configuration model and loaders for the satellite trajectory simulator.
//!
//! Every field has a compiled-in default, so an empty file (or no file at all)
//! describes the reference run: a satellite 700 km above the surface moving
//! tangentially at 7.5 km/s, stepped every 10 s for 10 000 steps.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use sat_core::constants::R_EARTH;
use sat_core::units::{km_to_m, m_to_km};
use sat_core::vector::Vector3;

pub const DEFAULT_ALTITUDE_KM: f64 = 700.0;
pub const DEFAULT_SPEED_M_S: f64 = 7_500.0;
pub const DEFAULT_TIME_STEP_S: f64 = 10.0;
pub const DEFAULT_STEPS: usize = 10_000;
pub const DEFAULT_OUTPUT: &str = "trajectory_data.txt";

/// Parameters for a single propagation run.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Initial altitude above the mean Earth radius (km).
    pub altitude_km: f64,
    /// Initial speed, applied along +y so the orbit starts tangential (m/s).
    pub speed_m_s: f64,
    pub time_step_s: f64,
    pub steps: usize,
    /// Trajectory file; `-` writes to stdout.
    pub output: PathBuf,
    /// Optional JSON run summary.
    pub summary: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            altitude_km: DEFAULT_ALTITUDE_KM,
            speed_m_s: DEFAULT_SPEED_M_S,
            time_step_s: DEFAULT_TIME_STEP_S,
            steps: DEFAULT_STEPS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            summary: None,
        }
    }
}

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl SimulationConfig {
    /// Reject values that would make the run meaningless or start at the origin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_step_s.is_finite() || self.time_step_s <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "time_step_s",
                reason: format!(
                    "must be a positive number of seconds, got {}",
                    self.time_step_s
                ),
            });
        }
        let min_altitude_km = -m_to_km(R_EARTH);
        if !self.altitude_km.is_finite() || self.altitude_km <= min_altitude_km {
            return Err(ConfigError::Invalid {
                field: "altitude_km",
                reason: format!(
                    "must be finite and above {min_altitude_km} km (Earth's centre), got {}",
                    self.altitude_km
                ),
            });
        }
        if !self.speed_m_s.is_finite() {
            return Err(ConfigError::Invalid {
                field: "speed_m_s",
                reason: format!("must be finite, got {}", self.speed_m_s),
            });
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "output",
                reason: "path must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Initial radius from Earth's centre (m).
    pub fn initial_radius_m(&self) -> f64 {
        R_EARTH + km_to_m(self.altitude_km)
    }

    /// Initial `(position, velocity)` in the Earth-centred inertial frame.
    pub fn initial_state_vectors(&self) -> (Vector3, Vector3) {
        (
            Vector3::new(self.initial_radius_m(), 0.0, 0.0),
            Vector3::new(0.0, self.speed_m_s, 0.0),
        )
    }
}

/// Load a simulation config from `.toml`, or YAML for any other extension.
///
/// The loaded config is validated before it is returned.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, ConfigError> {
    let path = path.as_ref();
    let is_toml = path.extension().map(|ext| ext == "toml").unwrap_or(false);
    let config: SimulationConfig = if is_toml {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    config.validate()?;
    Ok(config)
}
