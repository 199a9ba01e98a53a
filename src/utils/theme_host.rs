//! Where the theme lives outside of the component tree: durable storage,
//! the host's colour-scheme preference and the `dark` class on `<html>`.

use std::cell::{Cell, RefCell};

use crate::error::ThemeError;

pub const STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

pub trait ThemeHost {
    /// Stored value for [`STORAGE_KEY`], `None` when unset.
    fn read_theme(&self) -> Result<Option<String>, ThemeError>;

    fn write_theme(&self, value: &str) -> Result<(), ThemeError>;

    /// Whether the host reports a dark colour-scheme preference.
    fn prefers_dark(&self) -> bool;

    fn set_root_dark(&self, dark: bool) -> Result<(), ThemeError>;
}

#[cfg(target_arch = "wasm32")]
pub type PlatformHost = BrowserHost;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformHost = MemoryHost;

pub fn platform_host() -> PlatformHost {
    PlatformHost::default()
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

#[cfg(target_arch = "wasm32")]
impl BrowserHost {
    fn window() -> Result<web_sys::Window, ThemeError> {
        web_sys::window().ok_or_else(|| ThemeError::Document("no window".to_string()))
    }

    fn storage() -> Result<web_sys::Storage, ThemeError> {
        Self::window()?
            .local_storage()?
            .ok_or_else(|| ThemeError::StorageUnavailable("localStorage is disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeHost for BrowserHost {
    fn read_theme(&self) -> Result<Option<String>, ThemeError> {
        Ok(Self::storage()?.get_item(STORAGE_KEY)?)
    }

    fn write_theme(&self, value: &str) -> Result<(), ThemeError> {
        Ok(Self::storage()?.set_item(STORAGE_KEY, value)?)
    }

    fn prefers_dark(&self) -> bool {
        Self::window()
            .ok()
            .and_then(|w| w.match_media(DARK_MEDIA_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }

    fn set_root_dark(&self, dark: bool) -> Result<(), ThemeError> {
        let root = Self::window()?
            .document()
            .and_then(|doc| doc.document_element())
            .ok_or_else(|| ThemeError::Document("no document element".to_string()))?;
        let class_list = root.class_list();
        if dark {
            class_list.add_1(DARK_CLASS)?;
        } else {
            class_list.remove_1(DARK_CLASS)?;
        }
        Ok(())
    }
}

/// Keeps everything in memory. Used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryHost {
    record: RefCell<Option<String>>,
    prefers_dark: Cell<bool>,
    root_dark: Cell<bool>,
}

impl MemoryHost {
    pub fn new(record: Option<&str>, prefers_dark: bool) -> Self {
        Self {
            record: RefCell::new(record.map(str::to_string)),
            prefers_dark: Cell::new(prefers_dark),
            root_dark: Cell::new(false),
        }
    }

    pub fn record(&self) -> Option<String> {
        self.record.borrow().clone()
    }

    pub fn root_dark(&self) -> bool {
        self.root_dark.get()
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.set(prefers_dark);
    }
}

impl ThemeHost for MemoryHost {
    fn read_theme(&self) -> Result<Option<String>, ThemeError> {
        Ok(self.record())
    }

    fn write_theme(&self, value: &str) -> Result<(), ThemeError> {
        *self.record.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn set_root_dark(&self, dark: bool) -> Result<(), ThemeError> {
        self.root_dark.set(dark);
        Ok(())
    }
}
