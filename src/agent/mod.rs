/// Probe state and its move/detonate transitions
pub mod probe;

pub use probe::Probe;
