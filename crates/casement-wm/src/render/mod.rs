//! Render projection: registry state to drawable frames.
//!
//! Projection is a pure function of the registry (windows plus stacking
//! order) and the chrome metrics. Renderers subscribe to registry events
//! and call [`project`] again; they never keep window state of their own.

mod frame;
mod hit_test;

pub use frame::*;
pub use hit_test::*;
