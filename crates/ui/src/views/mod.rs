mod drill;
mod notice;
mod practice;
mod settings_form;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use drill::DrillView;
pub use notice::FinishedAlert;
pub use practice::PracticeView;
pub use settings_form::SettingsForm;
