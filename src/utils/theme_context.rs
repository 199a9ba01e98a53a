use std::rc::Rc;

use dioxus::prelude::*;

use crate::utils::theme_host::{platform_host, PlatformHost};
use crate::utils::theme_state::{ThemeMode, ThemeState};

/// Theme state owned by the app root and shared through context.
#[derive(Clone)]
pub struct ThemeContext {
    state: Signal<ThemeState>,
    host: Rc<PlatformHost>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.state.read().mode()
    }

    pub fn is_dark(&self) -> bool {
        self.state.read().is_dark()
    }

    pub fn toggle(&self) -> ThemeMode {
        let mut state = self.state;
        let mode = state.write().toggle(self.host.as_ref());
        log::debug!("Theme toggled to {}", mode);
        mode
    }
}

/// Resolves the initial theme once and provides it to the tree. Call at the root.
pub fn use_theme_provider() -> ThemeContext {
    let host = use_hook(|| Rc::new(platform_host()));
    let state = use_signal(|| ThemeState::init(host.as_ref()));
    use_context_provider(|| ThemeContext { state, host })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
