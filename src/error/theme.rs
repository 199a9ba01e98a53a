use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    StorageUnavailable(String),
    Storage(String),
    Document(String),
    InvalidMode(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::StorageUnavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            ThemeError::Document(msg) => write!(f, "Document Error: {}", msg),
            ThemeError::InvalidMode(value) => write!(f, "Invalid theme mode: {:?}", value),
        }
    }
}

impl std::error::Error for ThemeError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ThemeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        ThemeError::Storage(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_failure() {
        let err = ThemeError::StorageUnavailable("localStorage disabled".to_string());
        assert_eq!(err.to_string(), "Storage Unavailable: localStorage disabled");

        let err = ThemeError::InvalidMode("sepia".to_string());
        assert_eq!(err.to_string(), "Invalid theme mode: \"sepia\"");
    }
}
