//! Contractile muscle state on top of a kinematic bar.

use glam::DVec2;

use crate::config::SimParameters;
use crate::error::{ModelError, ModelResult};
use crate::event::{ChangeEvent, Observers, ScalarField};
use crate::kinematics::{triangle, Bar, JointId, JointRegistry};

/// Which adductor division a muscle represents.
///
/// A2 inserts directly on the mandible with no tendon and zero pennation;
/// A3 inserts anteriorly via a tendon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuscleRole {
    A2,
    A3,
}

impl MuscleRole {
    pub fn label(&self) -> &'static str {
        match self {
            MuscleRole::A2 => "A2",
            MuscleRole::A3 => "A3",
        }
    }
}

/// A muscle: a bar from origin to insertion plus contractile state.
///
/// Contraction state is stored as fractions of the maximum force and
/// velocity, so that changes to mass or geometry are reflected on the next
/// force or velocity query rather than leaving a stale absolute value.
#[derive(Debug)]
pub struct Muscle {
    role: MuscleRole,
    bar: Bar,
    /// Tendon length in cm; the tendon is assumed inelastic.
    tendon_length_cm: f64,
    /// Muscle mass in grams.
    mass_g: f64,
    /// Pennation angle in radians.
    pennation_angle_rad: f64,
    /// Current contraction force as a fraction of the maximum force.
    force_fraction: f64,
    /// Current shortening velocity as a fraction of the maximum velocity.
    velocity_fraction: f64,
    observers: Observers,
}

impl Muscle {
    /// Create a muscle over an existing origin-to-insertion bar.
    pub fn new(
        role: MuscleRole,
        bar: Bar,
        tendon_length_cm: f64,
        mass_g: f64,
        pennation_angle_rad: f64,
    ) -> Self {
        Self {
            role,
            bar,
            tendon_length_cm,
            mass_g,
            pennation_angle_rad,
            force_fraction: 0.0,
            velocity_fraction: 0.0,
            observers: Observers::new(),
        }
    }

    pub fn role(&self) -> MuscleRole {
        self.role
    }

    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    /// The origin joint (on the suspensorium, immobile).
    pub fn origin(&self) -> JointId {
        self.bar.joints()[0]
    }

    /// The insertion joint (on the mandible).
    pub fn insertion(&self) -> JointId {
        self.bar.joints()[1]
    }

    /// Origin-to-insertion distance at construction time, tendon included,
    /// in cm.
    pub fn resting_length(&self) -> f64 {
        self.bar.initial_length()
    }

    /// Current origin-to-insertion distance, in cm.
    pub fn length(&self, registry: &JointRegistry) -> f64 {
        self.bar.length(registry)
    }

    /// Current length of the muscle tissue without the tendon, in cm.
    pub fn current_muscle_length(&self, registry: &JointRegistry) -> f64 {
        self.length(registry) - self.tendon_length_cm
    }

    /// Resting length of the pennate muscle fibers, in cm.
    pub fn fiber_length(&self) -> f64 {
        self.pennation_angle_rad.cos() * self.resting_length() - self.tendon_length_cm
    }

    /// Estimate of average cross-sectional area from mass and fiber length,
    /// in cm².
    pub fn cross_section_area(&self, params: &SimParameters) -> f64 {
        let volume = self.mass_g / params.muscle_density_g_per_cm3;
        volume / self.fiber_length()
    }

    /// The maximum tension this muscle is capable of, in Newtons.
    pub fn max_force(&self, params: &SimParameters) -> f64 {
        // stress is in kPa and area in cm²
        params.force_per_area_max_kpa * 1000.0 * self.cross_section_area(params) / 10000.0
    }

    /// The maximum shortening velocity this muscle is capable of, in cm/s.
    pub fn max_velocity(&self, params: &SimParameters) -> f64 {
        params.velocity_per_length_max * self.fiber_length()
    }

    pub fn tendon_length(&self) -> f64 {
        self.tendon_length_cm
    }

    pub fn set_tendon_length(&mut self, tendon_length_cm: f64) {
        let old = self.tendon_length_cm;
        self.tendon_length_cm = tendon_length_cm;
        self.emit_scalar(ScalarField::TendonLength, old, tendon_length_cm);
    }

    pub fn mass(&self) -> f64 {
        self.mass_g
    }

    pub fn set_mass(&mut self, mass_g: f64) {
        let old = self.mass_g;
        self.mass_g = mass_g;
        self.emit_scalar(ScalarField::Mass, old, mass_g);
    }

    pub fn pennation_angle(&self) -> f64 {
        self.pennation_angle_rad
    }

    pub fn set_pennation_angle(&mut self, pennation_angle_rad: f64) {
        let old = self.pennation_angle_rad;
        self.pennation_angle_rad = pennation_angle_rad;
        self.emit_scalar(ScalarField::PennationAngle, old, pennation_angle_rad);
    }

    /// Current contraction force, in Newtons.
    pub fn force(&self, params: &SimParameters) -> f64 {
        self.force_fraction * self.max_force(params)
    }

    /// Set the contraction force in Newtons, clamped to [0, max force].
    pub fn set_force(&mut self, force_n: f64, params: &SimParameters) {
        let max = self.max_force(params);
        let fraction = if force_n < 0.0 {
            0.0
        } else if force_n > max {
            1.0
        } else {
            force_n / max
        };
        self.set_force_fraction(fraction);
    }

    pub fn force_fraction(&self) -> f64 {
        self.force_fraction
    }

    /// Set the contraction force as a fraction of the maximum, clamped
    /// to [0, 1].
    pub fn set_force_fraction(&mut self, force_fraction: f64) {
        let old = self.force_fraction;
        self.force_fraction = force_fraction.clamp(0.0, 1.0);
        self.emit_scalar(ScalarField::ForceFraction, old, self.force_fraction);
    }

    /// Current shortening velocity, in cm/s.
    pub fn velocity(&self, params: &SimParameters) -> f64 {
        self.velocity_fraction * self.max_velocity(params)
    }

    /// Set the shortening velocity in cm/s, clamped to [0, max velocity].
    pub fn set_velocity(&mut self, velocity: f64, params: &SimParameters) {
        let max = self.max_velocity(params);
        let fraction = if velocity < 0.0 {
            0.0
        } else if velocity > max {
            1.0
        } else {
            velocity / max
        };
        self.set_velocity_fraction(fraction);
    }

    pub fn velocity_fraction(&self) -> f64 {
        self.velocity_fraction
    }

    /// Set the shortening velocity as a fraction of the maximum, clamped
    /// to [0, 1].
    pub fn set_velocity_fraction(&mut self, velocity_fraction: f64) {
        let old = self.velocity_fraction;
        self.velocity_fraction = velocity_fraction.clamp(0.0, 1.0);
        self.emit_scalar(ScalarField::VelocityFraction, old, self.velocity_fraction);
    }

    /// Register an observer for scalar changes on this muscle.
    pub fn observe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.observers.subscribe(listener);
    }

    /// Independent copy with a fresh (empty) observer list.
    pub fn snapshot(&self) -> Muscle {
        Muscle {
            role: self.role,
            bar: self.bar,
            tendon_length_cm: self.tendon_length_cm,
            mass_g: self.mass_g,
            pennation_angle_rad: self.pennation_angle_rad,
            force_fraction: self.force_fraction,
            velocity_fraction: self.velocity_fraction,
            observers: Observers::new(),
        }
    }

    fn emit_scalar(&mut self, field: ScalarField, old: f64, new: f64) {
        self.observers.emit(&ChangeEvent::MuscleChanged {
            role: self.role,
            field,
            old,
            new,
        });
    }
}

/// Locate the origin of a muscle from distance measurements.
///
/// Given the distance from the origin to the quadrate-articular joint and the
/// muscle length from origin to insertion, solves the triangle formed with
/// the joint-to-insertion segment and places the origin above the jaw.
pub fn locate_origin(
    origin_to_joint: f64,
    origin_to_insertion: f64,
    qa_joint: DVec2,
    insertion: DVec2,
) -> ModelResult<DVec2> {
    let joint_to_insertion = qa_joint.distance(insertion);
    if !triangle::valid_triangle(joint_to_insertion, origin_to_joint, origin_to_insertion) {
        return Err(ModelError::InvalidTriangle {
            context: "muscle origin placement",
            sides: [joint_to_insertion, origin_to_joint, origin_to_insertion],
        });
    }

    // angle at the quadrate-articular joint between the in-lever and the
    // line to the muscle origin
    let joint_angle =
        triangle::angle_between(joint_to_insertion, origin_to_joint, origin_to_insertion);
    // angle of the joint-to-insertion member to horizontal
    let input_angle = (insertion.y / insertion.x).atan();
    let origin_angle = joint_angle + input_angle;

    Ok(DVec2::new(
        qa_joint.x + origin_to_joint * origin_angle.cos(),
        qa_joint.y + origin_to_joint * origin_angle.sin(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::JointKind;

    const EPSILON: f64 = 1e-9;

    fn test_muscle(registry: &mut JointRegistry) -> Muscle {
        let origin = registry.insert(JointKind::Fixed, DVec2::new(0.0, 2.0));
        let insertion = registry.insert(JointKind::Mobile, DVec2::ZERO);
        let bar = Bar::new(registry, origin, insertion);
        // 2 cm long, 0.2 cm tendon, 1.05 g, no pennation
        Muscle::new(MuscleRole::A3, bar, 0.2, 1.05, 0.0)
    }

    #[test]
    fn test_fiber_geometry() {
        let mut registry = JointRegistry::new();
        let muscle = test_muscle(&mut registry);
        let params = SimParameters::default();

        assert!((muscle.resting_length() - 2.0).abs() < EPSILON);
        assert!((muscle.fiber_length() - 1.8).abs() < EPSILON);
        // volume 1.05 g / 1.05 g/cm³ = 1 cm³, over 1.8 cm of fiber
        assert!((muscle.cross_section_area(&params) - 1.0 / 1.8).abs() < EPSILON);
    }

    #[test]
    fn test_max_force_units() {
        let mut registry = JointRegistry::new();
        let muscle = test_muscle(&mut registry);
        let params = SimParameters::default();

        // 200 kPa over (1/1.8) cm²: 200e3 N/m² * (1/1.8)e-4 m² = 100/9 N
        let expected = 200.0 * 1000.0 * (1.0 / 1.8) / 10000.0;
        assert!((muscle.max_force(&params) - expected).abs() < EPSILON);
        assert!((muscle.max_velocity(&params) - 18.0).abs() < EPSILON);
    }

    #[test]
    fn test_fraction_setters_clamp() {
        let mut registry = JointRegistry::new();
        let mut muscle = test_muscle(&mut registry);

        muscle.set_force_fraction(1.5);
        assert_eq!(muscle.force_fraction(), 1.0);
        muscle.set_force_fraction(-0.5);
        assert_eq!(muscle.force_fraction(), 0.0);

        muscle.set_velocity_fraction(0.3);
        assert_eq!(muscle.velocity_fraction(), 0.3);
    }

    #[test]
    fn test_set_force_in_newtons() {
        let mut registry = JointRegistry::new();
        let mut muscle = test_muscle(&mut registry);
        let params = SimParameters::default();

        let max = muscle.max_force(&params);
        muscle.set_force(max / 2.0, &params);
        assert!((muscle.force_fraction() - 0.5).abs() < EPSILON);
        muscle.set_force(max * 2.0, &params);
        assert_eq!(muscle.force_fraction(), 1.0);
    }

    #[test]
    fn test_locate_origin_rejects_invalid_triangle() {
        let err = locate_origin(0.1, 0.1, DVec2::ZERO, DVec2::new(-1.0, 0.0)).unwrap_err();
        assert!(matches!(err, ModelError::InvalidTriangle { .. }));
    }

    #[test]
    fn test_locate_origin_isoceles() {
        // origin equidistant (1 cm) from both ends of a 1 cm segment:
        // the triangle is equilateral and the origin sits above the midpoint
        let origin = locate_origin(1.0, 1.0, DVec2::ZERO, DVec2::new(1.0, 0.0)).unwrap();
        assert!((origin.x - 0.5).abs() < 1e-6);
        assert!((origin.y - (3.0f64).sqrt() / 2.0).abs() < 1e-6);
    }
}
