//! Length-proportional velocity model.
//!
//! During a strike the muscle starts at its longest (jaw fully open) moving
//! at its peak velocity, and shortens to its minimum length at minimum
//! velocity. Velocity is taken to vary linearly with length in between;
//! force at a given length follows the Hill equation from the velocity.
//!
//! Reference: Westneat, J Theor Biol 2003.

use crate::muscle::hill;

/// An immutable snapshot of a muscle's length-velocity line.
///
/// Captured from a specimen's geometry at a given activation level; rebuild
/// it after any change to the jaw geometry or the activation fractions.
#[derive(Debug, Clone, Copy)]
pub struct LinearVelocityModel {
    /// Muscle length at full gape (the start of the closing stroke), cm.
    len_peak: f64,
    /// Muscle length with the jaw closed, cm.
    len_min: f64,
    /// Shortening velocity at `len_peak`, cm/s.
    v_peak: f64,
    /// Shortening velocity at `len_min`, cm/s.
    v_min: f64,
    /// The muscle's maximum shortening velocity, cm/s.
    max_velocity: f64,
    /// The muscle's maximum isometric force, N.
    max_force: f64,
}

impl LinearVelocityModel {
    pub fn new(
        len_peak: f64,
        len_min: f64,
        v_peak: f64,
        v_min: f64,
        max_velocity: f64,
        max_force: f64,
    ) -> Self {
        Self {
            len_peak,
            len_min,
            v_peak,
            v_min,
            max_velocity,
            max_force,
        }
    }

    /// Slope of the length-velocity line, dv/dl.
    ///
    /// Both length and velocity decrease over the closing stroke, so the
    /// slope is positive.
    fn dvdl(&self) -> f64 {
        (self.v_min - self.v_peak) / (self.len_min - self.len_peak)
    }

    /// Shortening velocity at a given muscle length, cm/s.
    ///
    /// A zero-span stroke (open and closed lengths equal) pins the muscle
    /// at `len_peak`, so the velocity there is `v_peak`.
    pub fn velocity_at(&self, length: f64) -> f64 {
        if self.len_min == self.len_peak {
            return self.v_peak;
        }
        self.v_peak + self.dvdl() * (length - self.len_peak)
    }

    /// Contraction force at a given muscle length, in N, from the Hill
    /// equation at that length's velocity.
    pub fn force_at(&self, length: f64) -> f64 {
        let fraction = hill::force_fraction(self.velocity_at(length) / self.max_velocity);
        fraction * self.max_force
    }

    /// Time since the start of the closing stroke at a given length, in s.
    ///
    /// t = 0 at full gape with velocity `v_peak`; integrating dl/dt = −v
    /// along the linear length-velocity line gives an exponential decay,
    /// so t = (ln v_peak − ln v) / (dv/dl).
    pub fn time_at(&self, length: f64) -> f64 {
        let dvdl = self.dvdl();
        -self.velocity_at(length).ln() / dvdl + self.v_peak.ln() / dvdl
    }

    /// Work performed by the muscle from full gape to a given length.
    ///
    /// Numerical approximation over 20 bins; in the units of force ×
    /// length (N·cm here).
    pub fn work_to(&self, length: f64) -> f64 {
        let bins = 20;
        let step = (length - self.len_peak) / bins as f64;
        let mut l = self.len_peak;
        let mut work = 0.0;
        for _ in 0..bins {
            l += step;
            work += (self.force_at(l) * step).abs();
        }
        work
    }
}
