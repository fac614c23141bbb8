//! Throw-and-score simulation core.
//!
//! Owns each token's motion state, arbitrates which input modality currently
//! holds a token, turns held-phase input into a release velocity and spin,
//! integrates free flight under gravity with ground friction, and ranks
//! player tokens by distance to the marker. Input capture and rendering live
//! in the host shell; this crate only consumes world-space updates and
//! exposes read-only snapshots.

pub mod config;
pub mod error;
pub mod estimator;
pub mod grab;
pub mod integrator;
pub mod registry;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod token;
pub mod vec3;
