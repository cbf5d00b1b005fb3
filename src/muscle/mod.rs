//! Hill-type muscle mechanics.
//!
//! A muscle is a plastic bar with contractile state layered on top: mass,
//! tendon length and pennation angle give the fiber geometry, and the
//! normalized Hill equation relates contraction force to shortening velocity.
//!
//! Reference: Hill, Proc R Soc B 1938; Westneat, J Theor Biol 2003.

mod contractile;
pub mod hill;
mod velocity_model;

pub use contractile::{locate_origin, Muscle, MuscleRole};
pub use velocity_model::LinearVelocityModel;
