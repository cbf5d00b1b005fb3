//! Two-joint connectors.

use crate::kinematics::{JointId, JointRegistry};

/// A bar between two joints.
///
/// Plastic: strain is informational only and does not resist force. The
/// initial length is captured at construction and never changes, even when
/// the joints move apart.
#[derive(Debug, Clone, Copy)]
pub struct Bar {
    j1: JointId,
    j2: JointId,
    initial_length: f64,
}

impl Bar {
    /// Connect two joints, capturing the current distance between them as the
    /// bar's initial length.
    pub fn new(registry: &JointRegistry, j1: JointId, j2: JointId) -> Self {
        let initial_length = registry.distance(j1, j2);
        Self {
            j1,
            j2,
            initial_length,
        }
    }

    /// Current distance between the end joints, in cm.
    pub fn length(&self, registry: &JointRegistry) -> f64 {
        registry.distance(self.j1, self.j2)
    }

    /// The length at construction time, in cm.
    pub fn initial_length(&self) -> f64 {
        self.initial_length
    }

    /// Engineering strain, (L − L0) / L0.
    pub fn strain(&self, registry: &JointRegistry) -> f64 {
        (self.length(registry) - self.initial_length) / self.initial_length
    }

    pub fn joints(&self) -> [JointId; 2] {
        [self.j1, self.j2]
    }

    /// The joint at the other end of the bar from a given joint.
    pub fn other_joint(&self, joint: JointId) -> JointId {
        if joint == self.j1 {
            self.j2
        } else {
            self.j1
        }
    }

    /// Whether the given joint is an end of this bar.
    pub fn connects(&self, joint: JointId) -> bool {
        joint == self.j1 || joint == self.j2
    }
}

/// Bars are equal when they connect the same pair of joints, in either order.
impl PartialEq for Bar {
    fn eq(&self, other: &Self) -> bool {
        (self.j1 == other.j1 && self.j2 == other.j2)
            || (self.j1 == other.j2 && self.j2 == other.j1)
    }
}

impl Eq for Bar {}
