//! Command implementations

pub mod reconstruct;

pub use reconstruct::{ReconstructConfig, ReconstructResult, reconstruct, run_reconstruct};
