//! State Management
//!
//! Global application state and the browser submission sink.

pub mod global;
pub mod sink;

pub use global::{provide_global_state, GlobalState, Toast};
pub use sink::ConsoleSink;
