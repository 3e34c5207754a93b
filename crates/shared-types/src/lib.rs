pub mod implementation;
pub mod origin;
pub mod source;
pub mod types;
pub mod vocabulary;

pub use implementation::ImplementationKey;
pub use origin::OriginKey;
pub use source::Source;
pub use types::{DiffReport, DocumentDiff, ReportField};
pub use vocabulary::{SrcMapping, StatusKey};
