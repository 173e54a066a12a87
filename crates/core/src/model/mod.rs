mod config;
mod notice;
mod question;

pub use config::{ConfigError, MaxFactor, PackSize, PracticeConfig};
pub use notice::FinishedNotice;
pub use question::{AnswerFeedback, Question};
