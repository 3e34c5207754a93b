use shared_docx::DocxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplaterError {
    #[error("Expected exactly one '{field}' cell, found {found}")]
    AmbiguousOrMissingField { field: String, found: usize },

    #[error("Malformed {field} cell: {text:?}")]
    MalformedField { field: String, text: String },

    #[error("Unable to find a control name in table heading {heading:?}")]
    ControlNameNotFound { heading: String },

    #[error(transparent)]
    Docx(#[from] DocxError),
}
