pub mod components;
pub mod hooks;
pub mod state;

pub use state::StatusState;
