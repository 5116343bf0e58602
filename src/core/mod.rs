//! Generic status-machine building blocks.
//!
//! - The `State` trait every engine status implements
//! - Guard predicates that decide whether an operation may run
//! - Immutable history of status changes
//!
//! Nothing here performs I/O.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
