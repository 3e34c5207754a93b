//! Locating labelled cells inside a control table

use crate::error::TemplaterError;
use shared_docx::select::{cells_starting_with, text_runs};
use shared_docx::{NodeId, XmlDocument};

/// A labelled cell and the text runs that hold its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCell {
    pub cell: NodeId,
    pub runs: Vec<NodeId>,
}

impl FieldCell {
    fn bind(doc: &XmlDocument, field: &str, cell: NodeId) -> Result<Self, TemplaterError> {
        let runs = text_runs(doc, cell);
        if runs.is_empty() {
            return Err(TemplaterError::MalformedField {
                field: field.to_string(),
                text: doc.content(cell),
            });
        }
        Ok(Self { cell, runs })
    }
}

/// The single cell in `table` whose text starts with `label`
pub fn locate_section(
    doc: &XmlDocument,
    table: NodeId,
    label: &str,
) -> Result<NodeId, TemplaterError> {
    match cells_starting_with(doc, table, label).as_slice() {
        [cell] => Ok(*cell),
        found => Err(TemplaterError::AmbiguousOrMissingField {
            field: label.to_string(),
            found: found.len(),
        }),
    }
}

/// Like [`locate_section`], but the cell must also contain text runs
pub fn locate_unique(
    doc: &XmlDocument,
    table: NodeId,
    label: &str,
) -> Result<FieldCell, TemplaterError> {
    let cell = locate_section(doc, table, label)?;
    FieldCell::bind(doc, label, cell)
}

/// Every cell in `table` whose text starts with `label`, possibly none
pub fn locate_all(
    doc: &XmlDocument,
    table: NodeId,
    label: &str,
) -> Result<Vec<FieldCell>, TemplaterError> {
    cells_starting_with(doc, table, label)
        .into_iter()
        .map(|cell| FieldCell::bind(doc, label, cell))
        .collect()
}
