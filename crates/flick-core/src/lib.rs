pub mod animator;
pub mod constants;
pub mod error;
pub mod host;
pub mod integrator;
pub mod params;
pub mod scheduler;
pub mod state;
pub mod tracker;

pub use animator::Animator;
pub use error::FlickError;
pub use host::{PointerCapture, PointerInput, RenderSink};
pub use integrator::{SpringIntegrator, StepOutcome};
pub use params::SpringParams;
pub use scheduler::{FrameScheduler, ManualClock};
pub use state::{DragAnchor, DragSession, FrameClock, Mode, SimState, VelocitySample};

pub use glam::DVec2;
