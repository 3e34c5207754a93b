use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocxError {
    #[error("Failed to read DOCX archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse XML at byte {position}: {message}")]
    Xml { position: usize, message: String },

    #[error("DOCX archive has no {0} part")]
    MissingPart(String),

    #[error("Part {0} is not valid UTF-8")]
    Utf8(String),

    #[error("XML document has no root element")]
    EmptyDocument,
}
