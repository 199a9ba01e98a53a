use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::utils::theme_host::ThemeHost;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemeMode::Dark
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ThemeError::InvalidMode(other.to_string())),
        }
    }
}

/// Picks the mode for a fresh page load.
///
/// A stored `"dark"` always wins. The ambient preference is only consulted
/// when nothing is stored; an empty string counts as nothing. Any other
/// stored value, including garbage, resolves to light.
pub fn resolve_initial_mode(persisted: Option<&str>, prefers_dark: bool) -> ThemeMode {
    match persisted {
        Some("dark") => ThemeMode::Dark,
        None | Some("") if prefers_dark => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

/// In-memory display mode, kept in step with storage and the root flag.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    /// Resolves the initial mode from `host` and applies it.
    pub fn init<H: ThemeHost + ?Sized>(host: &H) -> Self {
        let persisted = match host.read_theme() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Theme storage unreadable, treating as unset: {}", e);
                None
            }
        };
        let mode = resolve_initial_mode(persisted.as_deref(), host.prefers_dark());
        log::info!(
            "Initial theme resolved to {} (stored: {:?})",
            mode,
            persisted
        );

        let state = Self { mode };
        state.apply(host);
        state
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn toggle<H: ThemeHost + ?Sized>(&mut self, host: &H) -> ThemeMode {
        self.set(self.mode.toggled(), host);
        self.mode
    }

    /// Makes `mode` current, then writes it through to the host.
    pub fn set<H: ThemeHost + ?Sized>(&mut self, mode: ThemeMode, host: &H) {
        self.mode = mode;
        self.apply(host);
    }

    fn apply<H: ThemeHost + ?Sized>(&self, host: &H) {
        if let Err(e) = host.write_theme(self.mode.as_str()) {
            log::warn!("Failed to persist theme {}: {}", self.mode, e);
        }
        if let Err(e) = host.set_root_dark(self.mode.is_dark()) {
            log::warn!("Failed to update document theme flag: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_stored_dark_ignores_ambient() {
        assert_eq!(resolve_initial_mode(Some("dark"), false), ThemeMode::Dark);
        assert_eq!(resolve_initial_mode(Some("dark"), true), ThemeMode::Dark);
    }

    #[test]
    fn test_resolve_stored_light_ignores_ambient() {
        assert_eq!(resolve_initial_mode(Some("light"), true), ThemeMode::Light);
        assert_eq!(resolve_initial_mode(Some("light"), false), ThemeMode::Light);
    }

    #[test]
    fn test_resolve_unset_follows_ambient() {
        assert_eq!(resolve_initial_mode(None, true), ThemeMode::Dark);
        assert_eq!(resolve_initial_mode(None, false), ThemeMode::Light);
    }

    #[test]
    fn test_resolve_empty_value_counts_as_unset() {
        assert_eq!(resolve_initial_mode(Some(""), true), ThemeMode::Dark);
        assert_eq!(resolve_initial_mode(Some(""), false), ThemeMode::Light);
    }

    #[test]
    fn test_resolve_garbage_value_is_light() {
        assert_eq!(resolve_initial_mode(Some("sepia"), true), ThemeMode::Light);
        assert_eq!(resolve_initial_mode(Some("Dark"), true), ThemeMode::Light);
    }

    #[test]
    fn test_mode_string_forms() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(
            "auto".parse::<ThemeMode>(),
            Err(ThemeError::InvalidMode("auto".to_string()))
        );
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn test_toggled_is_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }
}
