// ==========================================
// Jharkhand Trip Planner - application layer
// ==========================================
// Wires repositories, engines and APIs into shared state.
// ==========================================

pub mod state;

pub use state::AppState;
