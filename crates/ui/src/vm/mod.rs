mod practice_vm;
mod settings_vm;

pub use practice_vm::{FeedbackVm, PracticeVm, map_practice, parse_response};
pub use settings_vm::{PackOptionVm, SettingsVm, map_settings};
