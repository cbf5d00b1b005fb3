//! Configuration module for loading simulation parameters.
//!
//! All physiological parameters include citations to their source publications.

mod parameters;

pub use parameters::SimParameters;
