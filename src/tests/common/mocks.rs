use std::cell::{Cell, RefCell};

use crate::error::ThemeError;
use crate::utils::ThemeHost;

/// Host whose storage and document calls can be made to fail.
#[derive(Default)]
pub struct FlakyHost {
    pub record: RefCell<Option<String>>,
    pub prefers_dark: bool,
    pub root_dark: Cell<bool>,
    pub fail_read: bool,
    pub fail_write: bool,
    pub fail_document: bool,
    pub writes: Cell<usize>,
}

impl FlakyHost {
    pub fn storage_disabled(prefers_dark: bool) -> Self {
        Self {
            prefers_dark,
            fail_read: true,
            fail_write: true,
            ..Default::default()
        }
    }
}

impl ThemeHost for FlakyHost {
    fn read_theme(&self) -> Result<Option<String>, ThemeError> {
        if self.fail_read {
            return Err(ThemeError::StorageUnavailable("mock read failure".to_string()));
        }
        Ok(self.record.borrow().clone())
    }

    fn write_theme(&self, value: &str) -> Result<(), ThemeError> {
        if self.fail_write {
            return Err(ThemeError::Storage("mock quota exceeded".to_string()));
        }
        self.writes.set(self.writes.get() + 1);
        *self.record.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn set_root_dark(&self, dark: bool) -> Result<(), ThemeError> {
        if self.fail_document {
            return Err(ThemeError::Document("mock missing root".to_string()));
        }
        self.root_dark.set(dark);
        Ok(())
    }
}
