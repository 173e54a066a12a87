#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use sessions as session;

pub use error::{PackError, SessionError};

pub use sessions::{
    CompletionLatch, PackBuilder, SessionController, SessionPhase, SessionProgress,
    SubmitOutcome, generate_pack,
};
