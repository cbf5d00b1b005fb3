//! Joint arena with stable ids.
//!
//! Joints are 2D points with identity: two joints are the same joint only if
//! they have the same [`JointId`], never by coordinate comparison. A joint
//! shared between aggregates (a mandible insertion that is also a muscle end)
//! is represented by both aggregates holding the same id.

use glam::DVec2;

use crate::error::{ModelError, ModelResult};
use crate::event::{ChangeEvent, Observers};

/// Stable identifier of a joint within a [`JointRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JointId(u32);

/// Whether a joint may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointKind {
    /// Immobile; any attempt to relocate it is an error.
    Fixed,
    /// Free to move; moves are observable.
    Mobile,
}

#[derive(Debug, Clone, Copy)]
struct JointSlot {
    kind: JointKind,
    location: DVec2,
}

/// Arena of joints. All joint mutation goes through the registry, which
/// enforces immobility of fixed joints and notifies observers of moves.
#[derive(Debug, Default)]
pub struct JointRegistry {
    joints: Vec<JointSlot>,
    observers: Observers,
}

impl JointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a joint and return its id.
    pub fn insert(&mut self, kind: JointKind, location: DVec2) -> JointId {
        let id = JointId(self.joints.len() as u32);
        self.joints.push(JointSlot { kind, location });
        id
    }

    pub fn kind(&self, id: JointId) -> JointKind {
        self.joints[id.0 as usize].kind
    }

    pub fn location(&self, id: JointId) -> DVec2 {
        self.joints[id.0 as usize].location
    }

    /// Distance between two joints.
    pub fn distance(&self, a: JointId, b: JointId) -> f64 {
        self.location(a).distance(self.location(b))
    }

    /// Distance from a joint to an arbitrary point.
    pub fn distance_to(&self, id: JointId, point: DVec2) -> f64 {
        self.location(id).distance(point)
    }

    /// Move a joint.
    ///
    /// Fixed joints reject any location other than their current one (asking
    /// a fixed joint to "move" to where it already is is a no-op). Mobile
    /// joint moves are reported to observers with old and new location.
    pub fn set_location(&mut self, id: JointId, location: DVec2) -> ModelResult<()> {
        let slot = &mut self.joints[id.0 as usize];
        match slot.kind {
            JointKind::Fixed => {
                if slot.location == location {
                    Ok(())
                } else {
                    Err(ModelError::ImmobileJoint { joint: id })
                }
            }
            JointKind::Mobile => {
                let old = slot.location;
                slot.location = location;
                self.observers.emit(&ChangeEvent::JointMoved {
                    joint: id,
                    old,
                    new: location,
                });
                Ok(())
            }
        }
    }

    /// Register an observer for joint moves in this registry.
    pub fn observe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.observers.subscribe(listener);
    }

    /// Number of joints in the registry.
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Independent copy of all joints, with a fresh (empty) observer list.
    pub fn snapshot(&self) -> JointRegistry {
        JointRegistry {
            joints: self.joints.clone(),
            observers: Observers::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_identity_is_the_id() {
        let mut reg = JointRegistry::new();
        let a = reg.insert(JointKind::Mobile, DVec2::new(1.0, 2.0));
        let b = reg.insert(JointKind::Mobile, DVec2::new(1.0, 2.0));
        // same coordinates, different joints
        assert_ne!(a, b);
    }

    #[test]
    fn test_fixed_joint_rejects_moves() {
        let mut reg = JointRegistry::new();
        let pivot = reg.insert(JointKind::Fixed, DVec2::ZERO);

        // moving to the current location is a no-op
        assert!(reg.set_location(pivot, DVec2::ZERO).is_ok());

        let err = reg.set_location(pivot, DVec2::new(0.1, 0.0)).unwrap_err();
        assert_eq!(err, ModelError::ImmobileJoint { joint: pivot });
        assert_eq!(reg.location(pivot), DVec2::ZERO);
    }

    #[test]
    fn test_mobile_move_notifies_observers() {
        let mut reg = JointRegistry::new();
        let j = reg.insert(JointKind::Mobile, DVec2::ZERO);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        reg.observe(move |event| sink.borrow_mut().push(event.clone()));

        reg.set_location(j, DVec2::new(3.0, 4.0)).unwrap();

        let events = seen.borrow();
        assert_eq!(
            *events,
            vec![ChangeEvent::JointMoved {
                joint: j,
                old: DVec2::ZERO,
                new: DVec2::new(3.0, 4.0),
            }]
        );
    }

    #[test]
    fn test_distance() {
        let mut reg = JointRegistry::new();
        let a = reg.insert(JointKind::Fixed, DVec2::ZERO);
        let b = reg.insert(JointKind::Mobile, DVec2::new(3.0, 4.0));
        assert!((reg.distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut reg = JointRegistry::new();
        let j = reg.insert(JointKind::Mobile, DVec2::ZERO);

        let snap = reg.snapshot();
        reg.set_location(j, DVec2::new(1.0, 1.0)).unwrap();

        assert_eq!(snap.location(j), DVec2::ZERO);
        assert_eq!(reg.location(j), DVec2::new(1.0, 1.0));
    }
}
