//! Policy generation boundary
//!
//! The form only talks to [`PolicyGenerator`]. [`LocalGenerator`] renders
//! the built-in templates after a simulated round trip; a remote backend
//! can implement the same trait.

mod local;
mod traits;

pub use local::{LocalGenerator, DEFAULT_GENERATION_DELAY};
pub use traits::{GenerationError, PolicyGenerator, PolicyRequest};

#[cfg(test)]
pub use traits::MockPolicyGenerator;
