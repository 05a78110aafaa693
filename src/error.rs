//! Error type shared by catalog loading and the DOM glue.

use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    /// The catalog has no segments; the per-segment angle would be undefined.
    EmptyCatalog,
    /// The parallel label / description / image sequences disagree in length.
    LengthMismatch {
        labels: usize,
        descriptions: usize,
        images: usize,
    },
    /// JSON or JS value that does not decode into segment records.
    InvalidCatalog(String),
    /// A required element id is absent from the document.
    MissingElement(String),
    /// `mount_wheel*` was called while a wheel is already mounted.
    AlreadyMounted,
    /// Any other DOM / canvas call that returned a JS exception.
    Dom(String),
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::EmptyCatalog => write!(f, "wheel catalog must contain at least one segment"),
            WheelError::LengthMismatch {
                labels,
                descriptions,
                images,
            } => write!(
                f,
                "segment sequences differ in length (labels: {}, descriptions: {}, images: {})",
                labels, descriptions, images
            ),
            WheelError::InvalidCatalog(msg) => write!(f, "invalid wheel catalog: {}", msg),
            WheelError::MissingElement(id) => write!(f, "element #{} not found", id),
            WheelError::AlreadyMounted => write!(f, "a wheel is already mounted on this page"),
            WheelError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for WheelError {}

impl From<WheelError> for JsValue {
    fn from(err: WheelError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<JsValue> for WheelError {
    fn from(value: JsValue) -> Self {
        WheelError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_json::Error> for WheelError {
    fn from(err: serde_json::Error) -> Self {
        WheelError::InvalidCatalog(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for WheelError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        WheelError::InvalidCatalog(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = WheelError::LengthMismatch {
            labels: 3,
            descriptions: 2,
            images: 3,
        };
        assert_eq!(
            err.to_string(),
            "segment sequences differ in length (labels: 3, descriptions: 2, images: 3)"
        );
        assert_eq!(WheelError::MissingElement("wheel".into()).to_string(), "element #wheel not found");
    }

    #[test]
    fn json_errors_become_invalid_catalog() {
        let err: WheelError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, WheelError::InvalidCatalog(_)));
    }
}
