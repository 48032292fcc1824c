//! Preferences slice.

use crate::AppEnvironment;
use composable_state_core::{SmallVec, effect::Effect, reducer::Reducer};
use serde::{Deserialize, Serialize};

/// Color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background
    #[default]
    Light,
    /// Dark background
    Dark,
}

/// User preferences
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsState {
    /// Color scheme
    pub theme: Theme,
    /// UI language code
    pub language: String,
    /// Whether notifications are enabled
    pub notifications: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: "en".to_string(),
            notifications: true,
        }
    }
}

/// Preference actions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsAction {
    /// Switch color scheme
    SetTheme(Theme),
    /// Switch UI language
    SetLanguage(String),
    /// Flip notifications on or off
    ToggleNotifications,
}

/// Reducer for the preferences slice
#[derive(Clone, Copy, Debug, Default)]
pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Action = SettingsAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SettingsAction::SetTheme(theme) => state.theme = theme,
            SettingsAction::SetLanguage(language) => state.language = language,
            SettingsAction::ToggleNotifications => state.notifications = !state.notifications,
        }

        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composable_state_core::environment::SystemClock;
    use std::sync::Arc;

    #[test]
    fn defaults() {
        let settings = SettingsState::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.language, "en");
        assert!(settings.notifications);
    }

    #[test]
    fn actions_update_fields() {
        let env = AppEnvironment::new(Arc::new(SystemClock));
        let mut state = SettingsState::default();

        SettingsReducer.reduce(&mut state, SettingsAction::SetTheme(Theme::Dark), &env);
        SettingsReducer.reduce(&mut state, SettingsAction::SetLanguage("fr".into()), &env);
        SettingsReducer.reduce(&mut state, SettingsAction::ToggleNotifications, &env);

        assert_eq!(
            state,
            SettingsState {
                theme: Theme::Dark,
                language: "fr".into(),
                notifications: false,
            }
        );
    }
}
