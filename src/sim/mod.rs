//! The contraction sweep.
//!
//! Drives a specimen's jaw from fully open to closed in equal muscle-length
//! steps, once for each adductor division, recording force, torque, timing
//! and power at every step, then summarizes the opening and closing phases.
//! The sweep works on a snapshot, so the caller's specimen is never moved.
//!
//! Reference: Westneat, J Theor Biol 2003, "MandibLever" simulation.

mod records;

pub use records::{BinRecord, ClosedSummary, OpenSummary, SweepResult};

use crate::config::SimParameters;
use crate::model::Specimen;
use crate::muscle::{hill, MuscleRole};

/// Per-muscle aggregates accumulated over a sweep.
struct SweepTotals {
    /// Sum of per-bin muscle forces, in N.
    force_n: f64,
    /// Sum of per-bin torques, in N·m.
    torque_nm: f64,
    /// Total closing time, in s.
    time_s: f64,
}

/// Run the full open-to-closed sweep for one specimen.
pub fn run_sweep(specimen: &Specimen, params: &SimParameters) -> SweepResult {
    let mut specimen = specimen.snapshot();

    let open = open_summary(&mut specimen, params);
    let (a2_bins, a2_totals) = sweep_muscle(&mut specimen, MuscleRole::A2, params);
    let (a3_bins, a3_totals) = sweep_muscle(&mut specimen, MuscleRole::A3, params);
    let closed = closed_summary(&mut specimen, params, &a2_totals, &a3_totals);

    SweepResult {
        open,
        closed,
        a2_bins,
        a3_bins,
    }
}

/// Step one muscle from its open-jaw length to its closed-jaw length.
fn sweep_muscle(
    specimen: &mut Specimen,
    role: MuscleRole,
    params: &SimParameters,
) -> (Vec<BinRecord>, SweepTotals) {
    let bins = params.sweep_bins;

    specimen.set_rotation(params.max_rotation_rad);
    specimen.refresh_muscle_state(params);

    let max_length = specimen.max_muscle_length(role, params);
    let min_length = specimen.min_muscle_length(role);
    let increment = (min_length - max_length) / bins as f64;
    let insertion_travel = specimen.max_insertion_travel(role, params);
    let max_contraction = specimen.max_contraction(role, params);
    let mass_kg = specimen.muscle(role).mass() / 1000.0;

    let mut totals = SweepTotals {
        force_n: 0.0,
        torque_nm: 0.0,
        time_s: 0.0,
    };
    let mut records = Vec::with_capacity(bins as usize);

    for bin in 1..=bins {
        let previous_rotation = specimen.mandible().rotation();

        let length = max_length + increment * bin as f64;
        if !specimen.set_length(role, length) {
            log::warn!(
                "{}: {} cannot reach length {:.4} cm, recording bin {} at the previous pose",
                specimen.name(),
                role.label(),
                length,
                bin
            );
        }
        specimen.refresh_muscle_state(params);

        let d_angle = specimen.mandible().rotation() - previous_rotation;
        let force = specimen.muscle(role).force(params);
        let torque_nm = specimen.torque(role, params) / 100.0;
        totals.force_n += force;
        totals.torque_nm += torque_nm;

        // an uncontracted muscle has done no work yet
        let contraction = specimen.contraction(role, params);
        let work = if contraction == 0.0 {
            0.0
        } else {
            // work over one bin of insertion travel, N·cm to J
            force * (insertion_travel / bins as f64) / 100.0
        };
        let dt = if max_contraction > 0.0 {
            max_contraction
                / (bins as f64
                    * specimen.muscle(role).velocity_fraction()
                    * params.velocity_per_length_max)
        } else {
            0.0
        };
        let (power, angular_velocity) = if dt > 0.0 {
            (work / dt, d_angle / dt)
        } else {
            (0.0, 0.0)
        };
        totals.time_s += dt;

        records.push(BinRecord {
            specimen: specimen.name().to_string(),
            muscle: role.label().to_string(),
            bin,
            jaw_angle_deg: (-specimen.mandible().rotation()).to_degrees(),
            gape_cm: specimen.gape(),
            output_force_n: specimen.output_force(role, params),
            bilateral_bite_force_n: 2.0 * specimen.bite_force_half(params),
            velocity_fraction: specimen.muscle(role).velocity_fraction(),
            force_fraction: specimen.muscle(role).force_fraction(),
            time_ms: totals.time_s * 1000.0,
            muscle_length_cm: specimen.muscle(role).length(specimen.registry()),
            contraction_pct: 100.0 * contraction,
            muscle_force_n: force,
            torque_nm,
            effective_ma: specimen.effective_mechanical_advantage(role),
            angular_velocity_deg_per_ms: angular_velocity.to_degrees() / 1000.0,
            tip_velocity_cm_per_ms: angular_velocity
                * specimen.mandible().out_lever(specimen.registry())
                / 1000.0,
            work_j: work,
            power_w: power,
            power_w_per_kg: power / mass_kg,
        });
    }

    (records, totals)
}

/// Summarize the opening phase at full gape.
fn open_summary(specimen: &mut Specimen, params: &SimParameters) -> OpenSummary {
    let iom_location = specimen
        .registry()
        .location(specimen.mandible().iom_insertion());
    let open_ma = specimen
        .mandible()
        .mechanical_advantage_at(specimen.registry(), iom_location);

    specimen.set_rotation(params.max_rotation_rad);
    specimen.refresh_muscle_state(params);

    let jaw_rotation_deg = (-params.max_rotation_rad).to_degrees();
    let gape = specimen.gape();

    OpenSummary {
        specimen: specimen.name().to_string(),
        jaw_rotation_deg,
        gape_cm: gape,
        open_duration_ms: params.open_duration_ms,
        open_ma,
        open_velocity_ratio: 1.0 / open_ma,
        angular_velocity_deg_per_ms: jaw_rotation_deg / params.open_duration_ms,
        tip_velocity_cm_per_ms: gape / params.open_duration_ms,
    }
}

/// Summarize the closed jaw, folding in the sweep aggregates.
fn closed_summary(
    specimen: &mut Specimen,
    params: &SimParameters,
    a2: &SweepTotals,
    a3: &SweepTotals,
) -> ClosedSummary {
    let bins = params.sweep_bins as f64;

    let a2_travel = specimen.max_insertion_travel(MuscleRole::A2, params);
    let a2_mean_force = a2.force_n / bins;
    let a2_work = a2_mean_force * a2_travel / 100.0;
    let a2_power_per_kg =
        a2_work / (a2.time_s * (specimen.muscle(MuscleRole::A2).mass() / 1000.0));

    let a3_travel = specimen.max_insertion_travel(MuscleRole::A3, params);
    let a3_mean_force = a3.force_n / bins;
    let a3_work = a3_mean_force * a3_travel / 100.0;
    let a3_power_per_kg =
        a3_work / (a3.time_s * (specimen.muscle(MuscleRole::A3).mass() / 1000.0));

    let max_bite = 2.0
        * (specimen.max_output_force(MuscleRole::A2, params)
            + specimen.max_output_force(MuscleRole::A3, params));

    // land exactly on the closed pose before the closed-jaw outputs
    specimen.set_rotation(0.0);
    specimen.refresh_muscle_state(params);

    ClosedSummary {
        specimen: specimen.name().to_string(),
        jaw_rotation_deg: (-params.max_rotation_rad).to_degrees(),
        a2_bite_force_n: specimen.output_force(MuscleRole::A2, params),
        a3_bite_force_n: specimen.output_force(MuscleRole::A3, params),
        total_bite_force_n: 2.0 * specimen.bite_force_half(params),
        max_bite_force_n: max_bite,
        a2_ma: specimen.mechanical_advantage(MuscleRole::A2),
        a3_ma: specimen.mechanical_advantage(MuscleRole::A3),
        muscle_stress_kpa: params.force_per_area_max_kpa,
        a2_cross_section_cm2: specimen.muscle(MuscleRole::A2).cross_section_area(params),
        a2_max_force_n: specimen.muscle(MuscleRole::A2).max_force(params),
        a2_mean_force_n: a2_mean_force,
        a2_mean_torque_nm: a2.torque_nm / bins,
        a2_work_j: a2_work,
        a2_power_w_per_kg: a2_power_per_kg,
        a3_cross_section_cm2: specimen.muscle(MuscleRole::A3).cross_section_area(params),
        a3_max_force_n: specimen.muscle(MuscleRole::A3).max_force(params),
        a3_mean_force_n: a3_mean_force,
        a3_mean_torque_nm: a3.torque_nm / bins,
        a3_work_j: a3_work,
        a3_power_w_per_kg: a3_power_per_kg,
        max_velocity_lengths_per_s: params.velocity_per_length_max,
        peak_velocity_fraction: params.peak_velocity_fraction,
        min_velocity_fraction: params.min_velocity_fraction,
        force_fraction_at_min_velocity: hill::force_fraction(params.min_velocity_fraction),
        force_fraction_at_peak_velocity: hill::force_fraction(params.peak_velocity_fraction),
    }
}
