//! Core data models for the CMG simulation engine.
//!
//! This module contains the input and result structures exchanged with the
//! external input-collection and rendering collaborators.

mod inputs;
mod results;

pub use inputs::{FamilyInput, SimulationInputs};
pub use results::{FamilyResult, HoursBreakdown, SimulationResult};
