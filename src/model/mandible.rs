//! The lower jaw as a rotating lever.
//!
//! Joint positions are constructed from morphometric distance measurements
//! (Westneat, J Theor Biol 2003) with the quadrate-articular joint as the
//! pivot and the jaw tip anterior (+x). The closed orientation is frozen at
//! construction; all motion is a single rotation about the pivot, stored as
//! an angle in radians. Negative rotation opens the jaw.

use glam::{DMat2, DVec2};

use crate::config::SimParameters;
use crate::error::{ModelError, ModelResult};
use crate::event::{ChangeEvent, Observers, ScalarField};
use crate::kinematics::{triangle, Bar, JointId, JointKind, JointRegistry};
use crate::muscle::Muscle;

/// Index order of the mandible joints in the unrotated-location array.
const QA: usize = 0;
const A2_INSERTION: usize = 1;
const A3_INSERTION: usize = 2;
const IOM_INSERTION: usize = 3;
const JAW_TIP: usize = 4;

/// A fish mandible, constructed from morphometric data.
#[derive(Debug)]
pub struct Mandible {
    /// [qa, a2 insertion, a3 insertion, iom insertion, jaw tip]
    joints: [JointId; 5],
    /// Closed-jaw joint locations, frozen at construction.
    unrotated: [DVec2; 5],
    /// Current rotation about the pivot, in radians, from closed.
    rotation_rad: f64,
    observers: Observers,
}

impl Mandible {
    /// Build a mandible from distance measurements, all in centimeters.
    ///
    /// The pivot (quadrate-articular joint) is placed at the origin and the
    /// out-lever along +x; the A2 insertion is above the out-lever, the
    /// ligament insertion below, and the A3 insertion anterior to the A2
    /// insertion. The jaw is then re-oriented so the dorsal margin (A2
    /// insertion to jaw tip) is horizontal, and that pose is frozen as the
    /// closed position.
    ///
    /// * `a2_in_lever` - pivot to A2 insertion on the ascending process of
    ///   the articular
    /// * `a3_in_lever` - pivot to A3 insertion on the medial face
    /// * `open_in_lever` - pivot to the interoperculomandibular ligament
    ///   insertion
    /// * `out_lever` - pivot to the anterior jaw tip
    /// * `a2_a3_insertion_dist` - A2 insertion to A3 insertion
    /// * `dorsal_length` - A2 insertion to jaw tip
    /// * `ventral_length` - ligament insertion to jaw tip
    #[allow(clippy::too_many_arguments)]
    pub fn from_measurements(
        registry: &mut JointRegistry,
        a2_in_lever: f64,
        a3_in_lever: f64,
        open_in_lever: f64,
        out_lever: f64,
        a2_a3_insertion_dist: f64,
        dorsal_length: f64,
        ventral_length: f64,
    ) -> ModelResult<Mandible> {
        // the three triangles that define the jaw shape must each close
        if !triangle::valid_triangle(a2_in_lever, out_lever, dorsal_length) {
            return Err(ModelError::InvalidTriangle {
                context: "A2 in-lever, out-lever and dorsal length",
                sides: [a2_in_lever, out_lever, dorsal_length],
            });
        }
        if !triangle::valid_triangle(open_in_lever, out_lever, ventral_length) {
            return Err(ModelError::InvalidTriangle {
                context: "opening in-lever, out-lever and ventral length",
                sides: [open_in_lever, out_lever, ventral_length],
            });
        }
        if !triangle::valid_triangle(a2_in_lever, a3_in_lever, a2_a3_insertion_dist) {
            return Err(ModelError::InvalidTriangle {
                context: "A2 in-lever, A3 in-lever and insertion distance",
                sides: [a2_in_lever, a3_in_lever, a2_a3_insertion_dist],
            });
        }

        let qa = DVec2::ZERO;
        let jaw_tip = DVec2::new(out_lever, 0.0);

        // ligament insertion below the out-lever
        let open_angle = -triangle::angle_between(open_in_lever, out_lever, ventral_length);
        let iom = open_in_lever * DVec2::new(open_angle.cos(), open_angle.sin());

        // A2 insertion above the out-lever
        let a2_angle = triangle::angle_between(a2_in_lever, out_lever, dorsal_length);
        let a2 = a2_in_lever * DVec2::new(a2_angle.cos(), a2_angle.sin());

        // A3 insertion anterior to the A2 insertion
        let a3_angle =
            a2_angle - triangle::angle_between(a2_in_lever, a3_in_lever, a2_a3_insertion_dist);
        let a3 = a3_in_lever * DVec2::new(a3_angle.cos(), a3_angle.sin());

        // re-orient so the dorsal margin is horizontal, then freeze that
        // pose as the closed position
        let dorsal_angle = triangle::angle_of_line(a2, jaw_tip);
        let rebase = DMat2::from_angle(-dorsal_angle);
        let locations = [qa, rebase * a2, rebase * a3, rebase * iom, rebase * jaw_tip];

        let joints = [
            registry.insert(JointKind::Fixed, locations[QA]),
            registry.insert(JointKind::Mobile, locations[A2_INSERTION]),
            registry.insert(JointKind::Mobile, locations[A3_INSERTION]),
            registry.insert(JointKind::Mobile, locations[IOM_INSERTION]),
            registry.insert(JointKind::Mobile, locations[JAW_TIP]),
        ];

        Ok(Mandible {
            joints,
            unrotated: locations,
            rotation_rad: 0.0,
            observers: Observers::new(),
        })
    }

    /// Build a mandible from explicit joint locations.
    ///
    /// The given pose is taken as the closed position; the pivot need not be
    /// at the origin.
    pub fn from_points(
        registry: &mut JointRegistry,
        qa: DVec2,
        a2_insertion: DVec2,
        a3_insertion: DVec2,
        iom_insertion: DVec2,
        jaw_tip: DVec2,
    ) -> Mandible {
        let locations = [qa, a2_insertion, a3_insertion, iom_insertion, jaw_tip];
        let joints = [
            registry.insert(JointKind::Fixed, qa),
            registry.insert(JointKind::Mobile, a2_insertion),
            registry.insert(JointKind::Mobile, a3_insertion),
            registry.insert(JointKind::Mobile, iom_insertion),
            registry.insert(JointKind::Mobile, jaw_tip),
        ];
        Mandible {
            joints,
            unrotated: locations,
            rotation_rad: 0.0,
            observers: Observers::new(),
        }
    }

    /// The current rotation from the closed position, in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation_rad
    }

    /// Set the rotation relative to the closed orientation. Negative
    /// rotations open the jaw.
    pub fn set_rotation(&mut self, registry: &mut JointRegistry, radians: f64) {
        let old = self.rotation_rad;
        self.rotation_rad = radians;
        self.apply_rotation(registry);
        self.observers.emit(&ChangeEvent::MandibleChanged {
            field: ScalarField::Rotation,
            old,
            new: radians,
        });
    }

    /// Rotate relative to the current orientation. Positive closes the jaw.
    pub fn rotate(&mut self, registry: &mut JointRegistry, radians: f64) {
        self.set_rotation(registry, self.rotation_rad + radians);
    }

    /// Return the jaw to the closed position.
    pub fn reset_rotation(&mut self, registry: &mut JointRegistry) {
        self.set_rotation(registry, 0.0);
    }

    /// Distance the jaw tip has moved from its closed position, in cm.
    pub fn gape(&self, registry: &JointRegistry) -> f64 {
        registry.distance_to(self.joints[JAW_TIP], self.unrotated[JAW_TIP])
    }

    /// Rotate the mandible so that `joint` ends up at distance `radius` from
    /// `location`. Returns false, leaving the jaw unmoved, when no rotation
    /// about the pivot can reach that radius.
    pub fn rotate_joint_to(
        &mut self,
        registry: &mut JointRegistry,
        joint: JointId,
        location: DVec2,
        radius: f64,
    ) -> bool {
        let pivot = registry.location(self.joints[QA]);
        let pivot_to_location = pivot.distance(location);
        let pivot_to_joint = registry.distance(self.joints[QA], joint);
        let joint_to_location = registry.distance_to(joint, location);

        let min_radius = (pivot_to_location - pivot_to_joint).abs();
        let max_radius = pivot_to_location + pivot_to_joint;
        if radius < min_radius || radius > max_radius {
            return false;
        }

        // signed angles at the pivot between the pivot-to-location line and
        // the joint, before and after
        let angle_old =
            -triangle::angle_between(pivot_to_joint, pivot_to_location, joint_to_location);
        let angle_new = -triangle::angle_between(pivot_to_joint, pivot_to_location, radius);

        self.rotate(registry, angle_new - angle_old);
        true
    }

    /// Mechanical advantage of a force applied at a given point, transmitted
    /// to the jaw tip.
    pub fn mechanical_advantage_at(&self, registry: &JointRegistry, location: DVec2) -> f64 {
        let input_lever = registry.distance_to(self.joints[QA], location);
        input_lever / self.out_lever(registry)
    }

    /// Mechanical advantage of a force applied at a muscle's insertion.
    pub fn mechanical_advantage(
        &self,
        registry: &JointRegistry,
        muscle: &Muscle,
    ) -> ModelResult<f64> {
        let insertion = self.insertion_of(muscle)?;
        Ok(self.mechanical_advantage_at(registry, registry.location(insertion)))
    }

    /// A muscle's line of action relative to its lever arm, in radians.
    pub fn muscle_angle(&self, registry: &JointRegistry, muscle: &Muscle) -> ModelResult<f64> {
        let insertion = self.insertion_of(muscle)?;
        let origin = muscle.bar().other_joint(insertion);
        Ok(self.muscle_angle_at(registry, insertion, origin))
    }

    /// Line-of-action angle for an insertion/origin joint pair known to be
    /// attached to this mandible.
    pub fn muscle_angle_at(
        &self,
        registry: &JointRegistry,
        insertion: JointId,
        origin: JointId,
    ) -> f64 {
        let pivot = registry.location(self.joints[QA]);
        let insertion_loc = registry.location(insertion);
        let origin_loc = registry.location(origin);

        let input_lever_angle = triangle::angle_of_line(pivot, insertion_loc);
        let line_of_action = triangle::angle_of_line(insertion_loc, origin_loc);

        (std::f64::consts::PI - (line_of_action - input_lever_angle))
            % (2.0 * std::f64::consts::PI)
    }

    /// Effective mechanical advantage: the mechanical advantage scaled by
    /// the sine of the muscle's angle of attack.
    pub fn effective_mechanical_advantage(
        &self,
        registry: &JointRegistry,
        muscle: &Muscle,
    ) -> ModelResult<f64> {
        Ok(self.muscle_angle(registry, muscle)?.sin()
            * self.mechanical_advantage(registry, muscle)?)
    }

    /// Torque applied by a muscle about the pivot, in N·cm.
    pub fn torque(
        &self,
        registry: &JointRegistry,
        muscle: &Muscle,
        params: &SimParameters,
    ) -> ModelResult<f64> {
        let insertion = self.insertion_of(muscle)?;
        let input_lever = registry.distance(self.joints[QA], insertion);
        Ok(muscle.force(params) * self.muscle_angle(registry, muscle)?.sin() * input_lever)
    }

    /// Instantaneous angular velocity of the mandible due to a muscle's
    /// contraction velocity, in rad/s.
    pub fn angular_velocity(
        &self,
        registry: &JointRegistry,
        muscle: &Muscle,
        params: &SimParameters,
    ) -> ModelResult<f64> {
        let insertion = self.insertion_of(muscle)?;
        // tangential velocity of the insertion joint, in cm/s
        let velocity = muscle.velocity(params) / self.muscle_angle(registry, muscle)?.sin();
        let input_lever = registry.distance(self.joints[QA], insertion);
        Ok(velocity / input_lever)
    }

    /// Instantaneous velocity of the jaw tip due to a muscle's contraction
    /// velocity, in cm/s.
    pub fn tip_velocity(
        &self,
        registry: &JointRegistry,
        muscle: &Muscle,
        params: &SimParameters,
    ) -> ModelResult<f64> {
        Ok(self.angular_velocity(registry, muscle, params)? * self.out_lever(registry))
    }

    /// Distance a muscle's insertion has moved from the closed position,
    /// in cm.
    pub fn distance_moved(&self, registry: &JointRegistry, muscle: &Muscle) -> ModelResult<f64> {
        let insertion = self.insertion_of(muscle)?;
        let pivot = registry.location(self.joints[QA]);
        let location = registry.location(insertion);
        let closed = pivot + DMat2::from_angle(-self.rotation_rad) * (location - pivot);
        Ok(location.distance(closed))
    }

    /// Total distance a muscle's insertion travels from fully open to
    /// closed, in cm.
    pub fn max_distance_moved(
        &self,
        registry: &JointRegistry,
        muscle: &Muscle,
        params: &SimParameters,
    ) -> ModelResult<f64> {
        let insertion = self.insertion_of(muscle)?;
        let pivot = registry.location(self.joints[QA]);
        let location = registry.location(insertion);
        let closed = pivot + DMat2::from_angle(-self.rotation_rad) * (location - pivot);
        let open = pivot + DMat2::from_angle(params.max_rotation_rad) * (closed - pivot);
        Ok(open.distance(closed))
    }

    /// The joint where a muscle attaches to this mandible.
    ///
    /// Exactly one end of the muscle must be a mandible joint.
    pub fn insertion_of(&self, muscle: &Muscle) -> ModelResult<JointId> {
        let ends = muscle.bar().joints();
        let on_jaw: Vec<JointId> = ends
            .iter()
            .copied()
            .filter(|end| self.joints.contains(end))
            .collect();
        match on_jaw.as_slice() {
            [] => Err(ModelError::NotAttached),
            [insertion] => Ok(*insertion),
            _ => Err(ModelError::AmbiguousAttachment),
        }
    }

    /// Pivot to A2 insertion, in cm.
    pub fn a2_in_lever(&self, registry: &JointRegistry) -> f64 {
        registry.distance(self.joints[QA], self.joints[A2_INSERTION])
    }

    /// Pivot to A3 insertion, in cm.
    pub fn a3_in_lever(&self, registry: &JointRegistry) -> f64 {
        registry.distance(self.joints[QA], self.joints[A3_INSERTION])
    }

    /// Pivot to ligament insertion, in cm.
    pub fn open_in_lever(&self, registry: &JointRegistry) -> f64 {
        registry.distance(self.joints[QA], self.joints[IOM_INSERTION])
    }

    /// Pivot to jaw tip, in cm.
    pub fn out_lever(&self, registry: &JointRegistry) -> f64 {
        registry.distance(self.joints[QA], self.joints[JAW_TIP])
    }

    /// A2 insertion to A3 insertion, in cm.
    pub fn a2_a3_insertion_distance(&self, registry: &JointRegistry) -> f64 {
        registry.distance(self.joints[A2_INSERTION], self.joints[A3_INSERTION])
    }

    /// A2 insertion to jaw tip, in cm.
    pub fn dorsal_length(&self, registry: &JointRegistry) -> f64 {
        registry.distance(self.joints[JAW_TIP], self.joints[A2_INSERTION])
    }

    /// Ligament insertion to jaw tip, in cm.
    pub fn ventral_length(&self, registry: &JointRegistry) -> f64 {
        registry.distance(self.joints[JAW_TIP], self.joints[IOM_INSERTION])
    }

    pub fn qa_joint(&self) -> JointId {
        self.joints[QA]
    }

    pub fn a2_insertion(&self) -> JointId {
        self.joints[A2_INSERTION]
    }

    pub fn a3_insertion(&self) -> JointId {
        self.joints[A3_INSERTION]
    }

    pub fn iom_insertion(&self) -> JointId {
        self.joints[IOM_INSERTION]
    }

    pub fn jaw_tip(&self) -> JointId {
        self.joints[JAW_TIP]
    }

    pub fn joints(&self) -> [JointId; 5] {
        self.joints
    }

    /// Human-readable name of a mandible joint.
    pub fn joint_name(&self, joint: JointId) -> Option<&'static str> {
        let names = [
            "quadrate-articular joint",
            "A2 insertion",
            "A3 insertion",
            "interoperculomandibular ligament insertion",
            "jaw tip",
        ];
        self.joints
            .iter()
            .position(|&j| j == joint)
            .map(|i| names[i])
    }

    /// The structural members of the jaw, as named bars.
    pub fn members(&self, registry: &JointRegistry) -> Vec<(&'static str, Bar)> {
        let j = &self.joints;
        vec![
            ("InlevA2", Bar::new(registry, j[QA], j[A2_INSERTION])),
            ("InlevA3", Bar::new(registry, j[QA], j[A3_INSERTION])),
            ("InlevOpen", Bar::new(registry, j[QA], j[IOM_INSERTION])),
            ("OutLever", Bar::new(registry, j[QA], j[JAW_TIP])),
            (
                "A2-A3Ins",
                Bar::new(registry, j[A2_INSERTION], j[A3_INSERTION]),
            ),
            ("LJTop", Bar::new(registry, j[A2_INSERTION], j[JAW_TIP])),
            ("LJBot", Bar::new(registry, j[IOM_INSERTION], j[JAW_TIP])),
        ]
    }

    /// Register an observer for rotation changes.
    pub fn observe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.observers.subscribe(listener);
    }

    /// Independent copy with a fresh (empty) observer list. Joint ids still
    /// refer to the registry the mandible was built in, so pair this with
    /// [`JointRegistry::snapshot`].
    pub fn snapshot(&self) -> Mandible {
        Mandible {
            joints: self.joints,
            unrotated: self.unrotated,
            rotation_rad: self.rotation_rad,
            observers: Observers::new(),
        }
    }

    /// Move the mobile joints to the current rotation about the pivot.
    fn apply_rotation(&mut self, registry: &mut JointRegistry) {
        let pivot = self.unrotated[QA];
        let rotation = DMat2::from_angle(self.rotation_rad);
        for i in [A2_INSERTION, A3_INSERTION, IOM_INSERTION, JAW_TIP] {
            let location = pivot + rotation * (self.unrotated[i] - pivot);
            registry
                .set_location(self.joints[i], location)
                .expect("mandible rotation moves only mobile joints");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    /// Measurements from a largemouth bass test specimen.
    fn test_mandible(registry: &mut JointRegistry) -> Mandible {
        Mandible::from_measurements(registry, 0.598, 0.51, 0.246, 1.509, 0.42, 1.051, 1.695)
            .unwrap()
    }

    #[test]
    fn test_construction_reproduces_measurements() {
        let mut registry = JointRegistry::new();
        let mandible = test_mandible(&mut registry);

        assert!((mandible.a2_in_lever(&registry) - 0.598).abs() < EPSILON);
        assert!((mandible.a3_in_lever(&registry) - 0.51).abs() < EPSILON);
        assert!((mandible.open_in_lever(&registry) - 0.246).abs() < EPSILON);
        assert!((mandible.out_lever(&registry) - 1.509).abs() < EPSILON);
        assert!((mandible.a2_a3_insertion_distance(&registry) - 0.42).abs() < EPSILON);
        assert!((mandible.dorsal_length(&registry) - 1.051).abs() < EPSILON);
        assert!((mandible.ventral_length(&registry) - 1.695).abs() < EPSILON);
    }

    #[test]
    fn test_dorsal_margin_is_horizontal_when_closed() {
        let mut registry = JointRegistry::new();
        let mandible = test_mandible(&mut registry);

        let a2 = registry.location(mandible.a2_insertion());
        let tip = registry.location(mandible.jaw_tip());
        assert!((a2.y - tip.y).abs() < EPSILON);
    }

    #[test]
    fn test_invalid_measurements_are_rejected() {
        let mut registry = JointRegistry::new();
        let result = Mandible::from_measurements(
            &mut registry,
            // dorsal length far exceeds a2 in-lever + out-lever
            0.598,
            0.51,
            0.246,
            1.509,
            0.42,
            42.0,
            1.695,
        );
        assert!(matches!(
            result,
            Err(ModelError::InvalidTriangle { .. })
        ));
    }

    #[test]
    fn test_rotation_preserves_lengths() {
        let mut registry = JointRegistry::new();
        let mut mandible = test_mandible(&mut registry);

        mandible.set_rotation(&mut registry, -PI / 6.0);
        assert!((mandible.rotation() + PI / 6.0).abs() < EPSILON);
        assert!((mandible.out_lever(&registry) - 1.509).abs() < EPSILON);
        assert!((mandible.a2_in_lever(&registry) - 0.598).abs() < EPSILON);
    }

    #[test]
    fn test_rotate_is_relative_set_rotation_absolute() {
        let mut registry = JointRegistry::new();
        let mut mandible = test_mandible(&mut registry);

        mandible.rotate(&mut registry, -0.1);
        mandible.rotate(&mut registry, -0.1);
        assert!((mandible.rotation() + 0.2).abs() < EPSILON);

        mandible.set_rotation(&mut registry, -0.05);
        assert!((mandible.rotation() + 0.05).abs() < EPSILON);
    }

    #[test]
    fn test_reset_rotation_restores_closed_pose() {
        let mut registry = JointRegistry::new();
        let mut mandible = test_mandible(&mut registry);

        let tip_closed = registry.location(mandible.jaw_tip());
        mandible.set_rotation(&mut registry, -PI / 6.0);
        assert!(mandible.gape(&registry) > 0.1);

        mandible.reset_rotation(&mut registry);
        assert!(mandible.gape(&registry) < EPSILON);
        let tip = registry.location(mandible.jaw_tip());
        assert!(tip.distance(tip_closed) < EPSILON);
    }

    #[test]
    fn test_gape_matches_chord_length() {
        let mut registry = JointRegistry::new();
        let mut mandible = test_mandible(&mut registry);

        let theta = -PI / 6.0;
        mandible.set_rotation(&mut registry, theta);

        // chord of the tip's arc: 2 r sin(θ/2)
        let expected = 2.0 * 1.509 * (theta.abs() / 2.0).sin();
        assert!((mandible.gape(&registry) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_joint_to_reaches_radius() {
        let mut registry = JointRegistry::new();
        let mut mandible = test_mandible(&mut registry);

        let target = DVec2::new(-0.6, 0.2);
        let moved = mandible.rotate_joint_to(&mut registry, mandible.a2_insertion(), target, 0.5);
        assert!(moved);
        assert!((registry.distance_to(mandible.a2_insertion(), target) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_joint_to_unreachable_radius() {
        let mut registry = JointRegistry::new();
        let mut mandible = test_mandible(&mut registry);
        let rotation_before = mandible.rotation();

        let target = DVec2::new(-0.6, 0.2);
        // farther than the pivot-to-target and pivot-to-joint distances
        // can ever sum to
        assert!(!mandible.rotate_joint_to(&mut registry, mandible.a2_insertion(), target, 42.0));
        // and closer than the joint can ever come to the target
        assert!(!mandible.rotate_joint_to(&mut registry, mandible.a2_insertion(), target, 0.001));
        assert_eq!(mandible.rotation(), rotation_before);
    }

    #[test]
    fn test_from_points_keeps_given_pose() {
        let mut registry = JointRegistry::new();
        let mandible = Mandible::from_points(
            &mut registry,
            DVec2::new(1.0, 1.0),
            DVec2::new(1.3, 1.4),
            DVec2::new(1.5, 1.3),
            DVec2::new(1.2, 0.8),
            DVec2::new(2.5, 1.0),
        );

        assert_eq!(registry.location(mandible.qa_joint()), DVec2::new(1.0, 1.0));
        assert_eq!(mandible.rotation(), 0.0);
        assert!((mandible.out_lever(&registry) - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_about_offset_pivot() {
        let mut registry = JointRegistry::new();
        let mut mandible = Mandible::from_points(
            &mut registry,
            DVec2::new(1.0, 1.0),
            DVec2::new(1.3, 1.4),
            DVec2::new(1.5, 1.3),
            DVec2::new(1.2, 0.8),
            DVec2::new(2.5, 1.0),
        );

        mandible.set_rotation(&mut registry, -PI / 2.0);
        // the tip swings a quarter turn about the pivot at (1,1)
        let tip = registry.location(mandible.jaw_tip());
        assert!(tip.distance(DVec2::new(1.0, -0.5)) < 1e-9);
        // the pivot itself does not move
        assert_eq!(registry.location(mandible.qa_joint()), DVec2::new(1.0, 1.0));
    }

    #[test]
    fn test_mechanical_advantage_at_point() {
        let mut registry = JointRegistry::new();
        let mandible = test_mandible(&mut registry);

        let a2 = registry.location(mandible.a2_insertion());
        let ma = mandible.mechanical_advantage_at(&registry, a2);
        assert!((ma - 0.598 / 1.509).abs() < EPSILON);
    }
}
