//! Fish Jaw Sim - lower-jaw lever and muscle dynamics engine
//!
//! This library models the teleost lower jaw as a third-order lever driven
//! by the A2 and A3 divisions of the adductor mandibulae, with Hill-type
//! muscle dynamics, and sweeps the jaw from fully open to closed to predict
//! bite force, torque, timing and power.
//!
//! Reference: Westneat, M. W. 2003. A biomechanical model for analysis of
//! muscle force, power output and lower jaw motion in fishes.
//! J. Theor. Biol. 223:269-281.

pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod io;
pub mod kinematics;
pub mod model;
pub mod muscle;
pub mod sim;

pub use config::SimParameters;
pub use error::{ModelError, ModelResult};
pub use event::{ChangeEvent, Observers, ScalarField};
pub use export::SweepExporter;
pub use io::{load_specimens, save_specimens, SpecimenRecord};
pub use kinematics::{Bar, JointId, JointKind, JointRegistry};
pub use model::{Mandible, Specimen};
pub use muscle::{LinearVelocityModel, Muscle, MuscleRole};
pub use sim::{run_sweep, BinRecord, ClosedSummary, OpenSummary, SweepResult};
