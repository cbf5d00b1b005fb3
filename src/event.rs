//! Structured change notifications.
//!
//! Every mutation-capable entity (joint registry, mandible, muscle, specimen)
//! carries an [`Observers`] list so that UI and export layers can react to
//! state changes without polling. Events address the changed entity and field
//! explicitly and carry both the old and new value.

use std::fmt;

use glam::DVec2;

use crate::kinematics::JointId;
use crate::muscle::MuscleRole;

/// A scalar field of the mandible or a muscle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Rotation,
    ForceFraction,
    VelocityFraction,
    Mass,
    TendonLength,
    PennationAngle,
}

/// A single observed state change.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    /// A mobile joint moved.
    JointMoved {
        joint: JointId,
        old: DVec2,
        new: DVec2,
    },
    /// A mandible scalar changed (currently only rotation).
    MandibleChanged {
        field: ScalarField,
        old: f64,
        new: f64,
    },
    /// A muscle scalar changed.
    MuscleChanged {
        role: MuscleRole,
        field: ScalarField,
        old: f64,
        new: f64,
    },
    /// A specimen was renamed.
    SpecimenRenamed { old: String, new: String },
}

/// A registry of change callbacks.
///
/// Single-threaded by design; callbacks run synchronously inside the mutation
/// that triggered them. Snapshots of model aggregates always start with an
/// empty observer list.
#[derive(Default)]
pub struct Observers {
    listeners: Vec<Box<dyn FnMut(&ChangeEvent)>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for all events emitted by the owning entity.
    pub fn subscribe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver an event to every registered callback.
    pub fn emit(&mut self, event: &ChangeEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
