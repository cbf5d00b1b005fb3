//! A complete specimen: mandible plus adductor muscles.

use glam::{DMat2, DVec2};

use crate::config::SimParameters;
use crate::error::ModelResult;
use crate::event::{ChangeEvent, Observers};
use crate::io::SpecimenRecord;
use crate::kinematics::{Bar, JointId, JointKind, JointRegistry};
use crate::model::Mandible;
use crate::muscle::{locate_origin, LinearVelocityModel, Muscle, MuscleRole};

/// A specimen: a named mandible with A2 and A3 adductor muscles attached,
/// sharing one joint registry.
///
/// The A2 muscle inserts on the ascending process of the articular with no
/// tendon and zero pennation; the A3 inserts on the medial face of the
/// mandible via a tendon. Both origins are immobile joints on the
/// suspensorium, placed by triangulation from the measured distances.
#[derive(Debug)]
pub struct Specimen {
    name: String,
    registry: JointRegistry,
    mandible: Mandible,
    a2: Muscle,
    a3: Muscle,
    observers: Observers,
}

impl Specimen {
    /// Build a specimen from a set of morphometric measurements.
    pub fn from_record(record: &SpecimenRecord) -> ModelResult<Specimen> {
        let mut registry = JointRegistry::new();
        let mandible = Mandible::from_measurements(
            &mut registry,
            record.a2_in_lever,
            record.a3_in_lever,
            record.open_in_lever,
            record.out_lever,
            record.a2_a3_insertion_dist,
            record.dorsal_length,
            record.ventral_length,
        )?;

        let qa = registry.location(mandible.qa_joint());

        // A2: no tendon, zero pennation
        let a2_insertion = mandible.a2_insertion();
        let a2_origin_loc = locate_origin(
            record.a2_joint_dist,
            record.a2_length,
            qa,
            registry.location(a2_insertion),
        )?;
        let a2_origin = registry.insert(JointKind::Fixed, a2_origin_loc);
        let a2 = Muscle::new(
            MuscleRole::A2,
            Bar::new(&registry, a2_origin, a2_insertion),
            0.0,
            record.a2_mass,
            0.0,
        );

        // A3: inserts via a tendon
        let a3_insertion = mandible.a3_insertion();
        let a3_origin_loc = locate_origin(
            record.a3_joint_dist,
            record.a3_length,
            qa,
            registry.location(a3_insertion),
        )?;
        let a3_origin = registry.insert(JointKind::Fixed, a3_origin_loc);
        let a3 = Muscle::new(
            MuscleRole::A3,
            Bar::new(&registry, a3_origin, a3_insertion),
            record.a3_tendon_length,
            record.a3_mass,
            0.0,
        );

        Ok(Specimen {
            name: record.name.clone(),
            registry,
            mandible,
            a2,
            a3,
            observers: Observers::new(),
        })
    }

    /// Build a specimen from explicit 2D landmark locations.
    #[allow(clippy::too_many_arguments)]
    pub fn from_points(
        name: &str,
        qa: DVec2,
        a2_insertion: DVec2,
        a3_insertion: DVec2,
        iom_insertion: DVec2,
        jaw_tip: DVec2,
        a2_origin: DVec2,
        a3_origin: DVec2,
        a3_tendon_length: f64,
        a2_mass: f64,
        a3_mass: f64,
    ) -> Specimen {
        let mut registry = JointRegistry::new();
        let mandible = Mandible::from_points(
            &mut registry,
            qa,
            a2_insertion,
            a3_insertion,
            iom_insertion,
            jaw_tip,
        );

        let a2_origin = registry.insert(JointKind::Fixed, a2_origin);
        let a2 = Muscle::new(
            MuscleRole::A2,
            Bar::new(&registry, a2_origin, mandible.a2_insertion()),
            0.0,
            a2_mass,
            0.0,
        );

        let a3_origin = registry.insert(JointKind::Fixed, a3_origin);
        let a3 = Muscle::new(
            MuscleRole::A3,
            Bar::new(&registry, a3_origin, mandible.a3_insertion()),
            a3_tendon_length,
            a3_mass,
            0.0,
        );

        Specimen {
            name: name.to_string(),
            registry,
            mandible,
            a2,
            a3,
            observers: Observers::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        let old = std::mem::replace(&mut self.name, name.to_string());
        self.observers.emit(&ChangeEvent::SpecimenRenamed {
            old,
            new: self.name.clone(),
        });
    }

    pub fn registry(&self) -> &JointRegistry {
        &self.registry
    }

    pub fn mandible(&self) -> &Mandible {
        &self.mandible
    }

    pub fn muscle(&self, role: MuscleRole) -> &Muscle {
        match role {
            MuscleRole::A2 => &self.a2,
            MuscleRole::A3 => &self.a3,
        }
    }

    pub fn muscle_mut(&mut self, role: MuscleRole) -> &mut Muscle {
        match role {
            MuscleRole::A2 => &mut self.a2,
            MuscleRole::A3 => &mut self.a3,
        }
    }

    /// Rotate the mandible to an absolute rotation from closed.
    pub fn set_rotation(&mut self, radians: f64) {
        self.mandible.set_rotation(&mut self.registry, radians);
    }

    /// Pivot to A2 origin, in cm.
    pub fn a2_joint_dist(&self) -> f64 {
        self.registry
            .distance(self.mandible.qa_joint(), self.a2.origin())
    }

    /// Pivot to A3 origin, in cm.
    pub fn a3_joint_dist(&self) -> f64 {
        self.registry
            .distance(self.mandible.qa_joint(), self.a3.origin())
    }

    /// Length of a muscle at a hypothetical jaw rotation, without moving
    /// the jaw.
    pub fn muscle_length_at(&self, role: MuscleRole, rotation: f64) -> f64 {
        let muscle = self.muscle(role);
        let insertion = self.insertion_joint(role);
        let origin_loc = self.registry.location(muscle.bar().other_joint(insertion));

        let pivot = self.registry.location(self.mandible.qa_joint());
        let delta = DMat2::from_angle(rotation - self.mandible.rotation());
        let insertion_loc = pivot + delta * (self.registry.location(insertion) - pivot);

        origin_loc.distance(insertion_loc)
    }

    /// Muscle length at the fully open rotation, in cm.
    pub fn max_muscle_length(&self, role: MuscleRole, params: &SimParameters) -> f64 {
        self.muscle_length_at(role, params.max_rotation_rad)
    }

    /// Muscle length with the jaw closed, in cm.
    pub fn min_muscle_length(&self, role: MuscleRole) -> f64 {
        self.muscle_length_at(role, 0.0)
    }

    /// Rotate the mandible so a muscle reaches a given origin-to-insertion
    /// length. Returns false, leaving the jaw unmoved, when no rotation can
    /// achieve it.
    pub fn set_length(&mut self, role: MuscleRole, length: f64) -> bool {
        let insertion = self.insertion_joint(role);
        let origin = self.muscle(role).bar().other_joint(insertion);
        let origin_loc = self.registry.location(origin);
        self.mandible
            .rotate_joint_to(&mut self.registry, insertion, origin_loc, length)
    }

    /// Rotate the mandible to achieve a desired contraction of a muscle.
    ///
    /// Contraction is 0 with the jaw fully open, and would be 1.0 if the
    /// muscle tissue contracted to zero length (the tendon keeps its length
    /// at any contraction). Returns false, leaving the jaw unmoved, when the
    /// contraction is not reachable by rotation.
    pub fn set_contraction(
        &mut self,
        role: MuscleRole,
        contraction: f64,
        params: &SimParameters,
    ) -> bool {
        let max_length = self.max_muscle_length(role, params);
        let tendon = self.muscle(role).tendon_length();
        let new_length = max_length - contraction * (max_length - tendon);
        self.set_length(role, new_length)
    }

    /// Current contraction of a muscle, as a fraction of its open-jaw
    /// tissue length.
    pub fn contraction(&self, role: MuscleRole, params: &SimParameters) -> f64 {
        let max_length = self.max_muscle_length(role, params);
        let muscle = self.muscle(role);
        (max_length - muscle.length(&self.registry)) / (max_length - muscle.tendon_length())
    }

    /// The contraction of a muscle required to close the jaw.
    pub fn max_contraction(&self, role: MuscleRole, params: &SimParameters) -> f64 {
        let max_length = self.max_muscle_length(role, params);
        let muscle = self.muscle(role);
        (max_length - muscle.resting_length()) / (max_length - muscle.tendon_length())
    }

    /// Distance the jaw tip has moved from its closed position, in cm.
    pub fn gape(&self) -> f64 {
        self.mandible.gape(&self.registry)
    }

    /// Mechanical advantage of a muscle's in-lever over the out-lever.
    pub fn mechanical_advantage(&self, role: MuscleRole) -> f64 {
        let insertion_loc = self.registry.location(self.insertion_joint(role));
        self.mandible
            .mechanical_advantage_at(&self.registry, insertion_loc)
    }

    /// Torque applied by a muscle about the pivot at its current
    /// activation, in N·cm.
    pub fn torque(&self, role: MuscleRole, params: &SimParameters) -> f64 {
        let in_lever = self
            .registry
            .distance(self.mandible.qa_joint(), self.insertion_joint(role));
        self.muscle(role).force(params) * self.muscle_angle(role).sin() * in_lever
    }

    /// Angular velocity of the mandible due to a muscle's current
    /// contraction velocity, in rad/s.
    pub fn angular_velocity(&self, role: MuscleRole, params: &SimParameters) -> f64 {
        let in_lever = self
            .registry
            .distance(self.mandible.qa_joint(), self.insertion_joint(role));
        let tangential = self.muscle(role).velocity(params) / self.muscle_angle(role).sin();
        tangential / in_lever
    }

    /// Total distance a muscle's insertion travels over a full closing
    /// stroke, in cm.
    pub fn max_insertion_travel(&self, role: MuscleRole, params: &SimParameters) -> f64 {
        let pivot = self.registry.location(self.mandible.qa_joint());
        let location = self.registry.location(self.insertion_joint(role));
        let closed = pivot + DMat2::from_angle(-self.mandible.rotation()) * (location - pivot);
        let open = pivot + DMat2::from_angle(params.max_rotation_rad) * (closed - pivot);
        open.distance(closed)
    }

    /// Line-of-action angle of a muscle relative to its in-lever, in
    /// radians.
    pub fn muscle_angle(&self, role: MuscleRole) -> f64 {
        let insertion = self.insertion_joint(role);
        let origin = self.muscle(role).bar().other_joint(insertion);
        self.mandible
            .muscle_angle_at(&self.registry, insertion, origin)
    }

    /// Effective mechanical advantage of a muscle at the current rotation.
    pub fn effective_mechanical_advantage(&self, role: MuscleRole) -> f64 {
        let insertion_loc = self.registry.location(self.insertion_joint(role));
        self.muscle_angle(role).sin()
            * self
                .mandible
                .mechanical_advantage_at(&self.registry, insertion_loc)
    }

    /// Bite force at the jaw tip contributed by a muscle at its current
    /// activation, in Newtons.
    pub fn output_force(&self, role: MuscleRole, params: &SimParameters) -> f64 {
        self.muscle(role).force(params) * self.effective_mechanical_advantage(role)
    }

    /// The largest bite force at the jaw tip a muscle could contribute at
    /// the current rotation, in Newtons.
    pub fn max_output_force(&self, role: MuscleRole, params: &SimParameters) -> f64 {
        self.muscle(role).max_force(params) * self.effective_mechanical_advantage(role)
    }

    /// Combined jaw-tip force of A2 and A3 for one side of the head, in
    /// Newtons. Double this for the full bilateral bite force.
    pub fn bite_force_half(&self, params: &SimParameters) -> f64 {
        self.output_force(MuscleRole::A2, params) + self.output_force(MuscleRole::A3, params)
    }

    /// The length-velocity line of a muscle over a full closing stroke.
    pub fn velocity_model(&self, role: MuscleRole, params: &SimParameters) -> LinearVelocityModel {
        let muscle = self.muscle(role);
        let max_velocity = muscle.max_velocity(params);
        LinearVelocityModel::new(
            self.max_muscle_length(role, params),
            self.min_muscle_length(role),
            params.peak_velocity_fraction * max_velocity,
            params.min_velocity_fraction * max_velocity,
            max_velocity,
            muscle.max_force(params),
        )
    }

    /// Update both muscles' force and velocity from their length-velocity
    /// lines at the current jaw rotation. Call after any rotation that
    /// should reflect closing-stroke dynamics.
    pub fn refresh_muscle_state(&mut self, params: &SimParameters) {
        for role in [MuscleRole::A2, MuscleRole::A3] {
            let model = self.velocity_model(role, params);
            let length = self.muscle(role).length(&self.registry);
            let velocity = model.velocity_at(length);
            let force = model.force_at(length);
            let muscle = self.muscle_mut(role);
            muscle.set_velocity(velocity, params);
            muscle.set_force(force, params);
        }
    }

    /// The specimen's current state as a measurement record.
    pub fn to_record(&self) -> SpecimenRecord {
        SpecimenRecord {
            name: self.name.clone(),
            a2_in_lever: self.mandible.a2_in_lever(&self.registry),
            a3_in_lever: self.mandible.a3_in_lever(&self.registry),
            open_in_lever: self.mandible.open_in_lever(&self.registry),
            out_lever: self.mandible.out_lever(&self.registry),
            a2_length: self.a2.length(&self.registry),
            a3_length: self.a3.length(&self.registry),
            a3_tendon_length: self.a3.tendon_length(),
            a2_joint_dist: self.a2_joint_dist(),
            a3_joint_dist: self.a3_joint_dist(),
            a2_a3_insertion_dist: self.mandible.a2_a3_insertion_distance(&self.registry),
            dorsal_length: self.mandible.dorsal_length(&self.registry),
            ventral_length: self.mandible.ventral_length(&self.registry),
            a2_mass: self.a2.mass(),
            a3_mass: self.a3.mass(),
        }
    }

    /// Register an observer for rename events on this specimen.
    pub fn observe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.observers.subscribe(listener);
    }

    /// Independent deep copy with fresh (empty) observer lists throughout.
    pub fn snapshot(&self) -> Specimen {
        Specimen {
            name: self.name.clone(),
            registry: self.registry.snapshot(),
            mandible: self.mandible.snapshot(),
            a2: self.a2.snapshot(),
            a3: self.a3.snapshot(),
            observers: Observers::new(),
        }
    }

    fn insertion_joint(&self, role: MuscleRole) -> JointId {
        match role {
            MuscleRole::A2 => self.mandible.a2_insertion(),
            MuscleRole::A3 => self.mandible.a3_insertion(),
        }
    }
}
