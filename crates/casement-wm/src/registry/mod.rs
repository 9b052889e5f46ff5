//! Window registry and stacking order.

mod stacking;
mod types;

pub use stacking::StackingOrder;
pub use types::*;
