//! Domain layer - pure decision-engine computation.
//!
//! Nothing in this layer performs I/O or holds global state. Inputs are
//! never mutated; edits produce new values so repeated evaluation with
//! identical inputs yields identical outputs.

pub mod compatibility;
pub mod foundation;
pub mod profile;
pub mod scenario;
