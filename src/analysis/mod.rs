//! The pure computations behind an analysis. Each function takes its own input
//! slice and returns a fresh value, so independent analyses can run on
//! separate threads without coordination.

pub mod histogram;
pub mod probability;
pub mod statistics;
pub mod trend;
