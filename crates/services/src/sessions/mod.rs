mod controller;
mod latch;
mod pack;
mod progress;

// Public API of the session subsystem.
pub use crate::error::{PackError, SessionError};
pub use controller::{SessionController, SessionPhase, SubmitOutcome};
pub use latch::CompletionLatch;
pub use pack::{PackBuilder, generate_pack};
pub use progress::SessionProgress;
