/// Movement costs and heuristic estimates
pub mod cost;
/// Step-wise search state machine
pub mod engine;
/// Ordered open set with deterministic tie-breaking
pub mod frontier;
