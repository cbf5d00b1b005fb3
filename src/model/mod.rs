//! The jaw lever model.
//!
//! [`Mandible`] is the lower jaw as a rotating lever; [`Specimen`] attaches
//! the A2 and A3 adductor divisions to it and answers force, velocity and
//! contraction queries against the shared joint registry.
//!
//! Reference: Westneat, M. W. 2003. A biomechanical model for analysis of
//! muscle force, power output and lower jaw motion in fishes.
//! J. Theor. Biol. 223:269-281.

mod mandible;
mod specimen;

pub use mandible::Mandible;
pub use specimen::Specimen;
