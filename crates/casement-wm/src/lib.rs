//! Window-manager presentation state: registry, interaction, reconciliation
//! and render projection for windows owned by a remote compositor.

pub mod chrome;
pub mod interaction;
pub mod protocol;
pub mod queue;
pub mod registry;
pub mod render;
pub mod shell;

pub use chrome::{ChromeMetrics, Screen};
pub use interaction::{InteractionState, ResizeDirection};
pub use protocol::{IncomingSegment, OutgoingCommand, WindowMapSegment, WindowType};
pub use queue::CommandQueue;
pub use registry::{Registry, StackingOrder, WindowData};
pub use render::{hit_test, project, Frame, Region};
pub use shell::{ReconcileOutcome, Shell};
