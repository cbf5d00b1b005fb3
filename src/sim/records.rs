//! Output records for the contraction sweep.

use serde::Serialize;

/// Opening-phase summary for one specimen.
#[derive(Debug, Clone, Serialize)]
pub struct OpenSummary {
    pub specimen: String,
    /// Full gape rotation, in degrees of depression.
    pub jaw_rotation_deg: f64,
    /// Jaw-tip displacement at full gape (cm).
    pub gape_cm: f64,
    /// Assumed duration of the opening phase (ms).
    pub open_duration_ms: f64,
    /// Mechanical advantage of the opening in-lever.
    pub open_ma: f64,
    /// Velocity ratio of the opening linkage (1 / MA).
    pub open_velocity_ratio: f64,
    /// Mean opening angular velocity (degrees/ms).
    pub angular_velocity_deg_per_ms: f64,
    /// Mean jaw-tip opening velocity (cm/ms).
    pub tip_velocity_cm_per_ms: f64,
}

/// One bin of a muscle's open-to-closed contraction sweep.
#[derive(Debug, Clone, Serialize)]
pub struct BinRecord {
    pub specimen: String,
    /// "A2" or "A3".
    pub muscle: String,
    /// Bin number, 1-based; the last bin is the closed jaw.
    pub bin: u32,
    /// Jaw angle from closed, in degrees of depression.
    pub jaw_angle_deg: f64,
    /// Jaw-tip displacement from closed (cm).
    pub gape_cm: f64,
    /// Bite force at the jaw tip from this muscle (N).
    pub output_force_n: f64,
    /// Bite force from both muscles on both sides of the head (N).
    pub bilateral_bite_force_n: f64,
    /// Shortening velocity as a fraction of maximum.
    pub velocity_fraction: f64,
    /// Contraction force as a fraction of maximum.
    pub force_fraction: f64,
    /// Elapsed closing time (ms).
    pub time_ms: f64,
    /// Origin-to-insertion length (cm).
    pub muscle_length_cm: f64,
    /// Contraction from full gape, in percent.
    pub contraction_pct: f64,
    /// Contraction force (N).
    pub muscle_force_n: f64,
    /// Torque about the pivot (N·m).
    pub torque_nm: f64,
    /// Effective mechanical advantage.
    pub effective_ma: f64,
    /// Jaw angular velocity (degrees/ms).
    pub angular_velocity_deg_per_ms: f64,
    /// Jaw-tip velocity (cm/ms).
    pub tip_velocity_cm_per_ms: f64,
    /// Work done in this bin (J).
    pub work_j: f64,
    /// Power in this bin (W).
    pub power_w: f64,
    /// Mass-specific power (W/kg).
    pub power_w_per_kg: f64,
}

/// Closing-phase summary for one specimen, with per-muscle aggregates from
/// the sweep.
#[derive(Debug, Clone, Serialize)]
pub struct ClosedSummary {
    pub specimen: String,
    /// Full gape rotation, in degrees of depression.
    pub jaw_rotation_deg: f64,
    /// A2 bite-force contribution with the jaw closed (N).
    pub a2_bite_force_n: f64,
    /// A3 bite-force contribution with the jaw closed (N).
    pub a3_bite_force_n: f64,
    /// Bilateral closed-jaw bite force (N).
    pub total_bite_force_n: f64,
    /// Bilateral bite force at full activation (N).
    pub max_bite_force_n: f64,
    pub a2_ma: f64,
    pub a3_ma: f64,
    /// Maximum isometric stress used for the run (kPa).
    pub muscle_stress_kpa: f64,
    pub a2_cross_section_cm2: f64,
    pub a2_max_force_n: f64,
    /// Mean A2 force over the sweep (N).
    pub a2_mean_force_n: f64,
    /// Mean A2 torque over the sweep (N·m).
    pub a2_mean_torque_nm: f64,
    /// Total A2 work over the closing stroke (J).
    pub a2_work_j: f64,
    /// Mass-specific A2 power over the stroke (W/kg).
    pub a2_power_w_per_kg: f64,
    pub a3_cross_section_cm2: f64,
    pub a3_max_force_n: f64,
    pub a3_mean_force_n: f64,
    pub a3_mean_torque_nm: f64,
    pub a3_work_j: f64,
    pub a3_power_w_per_kg: f64,
    /// Maximum shortening velocity used for the run (lengths/s).
    pub max_velocity_lengths_per_s: f64,
    /// Activation fraction at the start of the stroke.
    pub peak_velocity_fraction: f64,
    /// Activation fraction at the end of the stroke.
    pub min_velocity_fraction: f64,
    /// Hill force fraction at the minimum velocity fraction.
    pub force_fraction_at_min_velocity: f64,
    /// Hill force fraction at the peak velocity fraction.
    pub force_fraction_at_peak_velocity: f64,
}

/// Everything the sweep produces for one specimen.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub open: OpenSummary,
    pub closed: ClosedSummary,
    pub a2_bins: Vec<BinRecord>,
    pub a3_bins: Vec<BinRecord>,
}
