//! Shared DOCX handling utilities
//!
//! This crate provides the WordprocessingML side of the templater: an
//! arena-backed XML tree with structural search, the zip container around
//! `word/document.xml`, and the content-control checkbox model.

pub mod checkbox;
pub mod container;
pub mod error;
pub mod select;
pub mod xml;

pub use checkbox::{find_checkbox_tag, CheckBox};
pub use container::{Docx, DOCUMENT_PART};
pub use error::DocxError;
pub use xml::{Attribute, NodeId, QName, XmlDocument};
