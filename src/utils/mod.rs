pub mod mailto;
pub mod theme_context;
pub mod theme_host;
pub mod theme_state;

pub use mailto::{build_mailto, ContactForm};
pub use theme_context::{use_theme, use_theme_provider, ThemeContext};
pub use theme_host::{platform_host, MemoryHost, PlatformHost, ThemeHost};
pub use theme_state::{resolve_initial_mode, ThemeMode, ThemeState};
