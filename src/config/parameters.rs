//! Parameter structures with citation metadata.
//!
//! All physiological parameters must include their source citation.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

/// Simulation parameters shared by every specimen in a run.
///
/// Muscle physiology values follow teleost adductor mandibulae measurements;
/// sign convention for rotation is negative = jaw opening (depression).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimParameters {
    /// Full gape rotation (rad), negative for opening
    /// Reference: 30° maximum depression in feeding strikes
    /// Source: Westneat, J Theor Biol 2003
    pub max_rotation_rad: f64,

    /// Muscle activation fraction at peak shortening velocity
    /// Source: Westneat, J Theor Biol 2003
    pub peak_velocity_fraction: f64,

    /// Smallest activation fraction the contraction sweep visits
    pub min_velocity_fraction: f64,

    /// Maximum isometric stress (kPa = kN/m²)
    /// Reference: 200 kPa for vertebrate striated muscle
    /// Source: Wainwright, Biomechanics of Ectotherm Locomotion 1983;
    /// Johnston, Fish Biomechanics 1983
    pub force_per_area_max_kpa: f64,

    /// Maximum shortening velocity (fiber lengths per second)
    /// Reference: ~10 L/s for fast fish muscle
    /// Source: James, Altringham & Goldspink, J Exp Biol 1995
    pub velocity_per_length_max: f64,

    /// Muscle tissue density (g/cm³)
    /// Source: Mendez & Keys, Metabolism 1960
    pub muscle_density_g_per_cm3: f64,

    /// Number of bins in the contraction sweep
    pub sweep_bins: u32,

    /// Duration of a full mouth-opening cycle (ms), for opening-phase
    /// velocity estimates
    pub open_duration_ms: f64,
}

impl SimParameters {
    /// Load parameters from a JSON file, or use defaults if the file
    /// is missing or malformed
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded simulation parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse simulation parameters: {}, using defaults",
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Simulation parameters file not found, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for SimParameters {
    fn default() -> Self {
        Self {
            // Westneat 2003: 30° of depression, opening is negative
            max_rotation_rad: -PI / 6.0,

            // Westneat 2003
            peak_velocity_fraction: 0.8,
            min_velocity_fraction: 0.05,

            // Wainwright 1983, Johnston 1983
            force_per_area_max_kpa: 200.0,

            // James et al. 1995
            velocity_per_length_max: 10.0,

            // Mendez & Keys 1960
            muscle_density_g_per_cm3: 1.05,

            // Sweep settings
            sweep_bins: 20,
            open_duration_ms: 30.0,
        }
    }
}
