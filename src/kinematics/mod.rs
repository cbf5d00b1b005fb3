//! Planar kinematics primitives: joints, bars, and triangle geometry.
//!
//! Joints live in a [`JointRegistry`] arena and are addressed by stable
//! integer ids, so a mandible insertion joint and a muscle end can share the
//! same joint without shared ownership. Bars connect two joints and remember
//! their construction-time length.

mod bar;
mod joint;
pub mod triangle;

pub use bar::Bar;
pub use joint::{JointId, JointKind, JointRegistry};
