use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unrecognised theme value `{0}`")]
    UnknownTheme(String),

    #[error("local storage is unavailable")]
    StorageUnavailable,

    #[error("failed to write to local storage: {0}")]
    StorageWrite(String),

    #[error("document is unavailable")]
    NoDocument,

    #[error("no element with id `{0}`")]
    MissingElement(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Renders a JS exception for logging. Most web-sys errors are `Error`
/// objects, so their debug form is the only portable description.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            Error::UnknownTheme("sepia".into()).to_string(),
            "unrecognised theme value `sepia`"
        );
        assert_eq!(
            Error::MissingElement("survey-section".into()).to_string(),
            "no element with id `survey-section`"
        );
    }
}
