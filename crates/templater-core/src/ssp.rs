//! A System Security Plan loaded from a DOCX file

use crate::error::TemplaterError;
use shared_docx::select::{normalize_space, rows, tables};
use shared_docx::{Docx, NodeId, XmlDocument};
use std::path::Path;

/// Heading text that marks a summary table
pub const SUMMARY_TABLE_HEADING: &str = "Control Summary Information";
/// Heading text that marks a narrative table
pub const NARRATIVE_TABLE_HEADING: &str = "What is the solution and how is it implemented?";

#[derive(Debug, Clone)]
pub struct Ssp {
    docx: Docx,
}

impl Ssp {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TemplaterError> {
        Ok(Self::from_docx(Docx::open(path)?))
    }

    pub fn from_docx(docx: Docx) -> Self {
        Self { docx }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TemplaterError> {
        Ok(self.docx.save(path)?)
    }

    pub fn document(&self) -> &XmlDocument {
        self.docx.document()
    }

    pub fn document_mut(&mut self) -> &mut XmlDocument {
        self.docx.document_mut()
    }

    /// All text in the document body
    pub fn content(&self) -> String {
        let doc = self.document();
        doc.content(doc.root())
    }

    /// Summary table roots in document order
    pub fn summary_tables(&self) -> Vec<NodeId> {
        tables_with_heading(self.document(), SUMMARY_TABLE_HEADING)
    }

    /// Narrative table roots in document order
    pub fn narrative_tables(&self) -> Vec<NodeId> {
        tables_with_heading(self.document(), NARRATIVE_TABLE_HEADING)
    }
}

// `//w:tbl[w:tr[1][contains(normalize-space(), heading)]]`
fn tables_with_heading(doc: &XmlDocument, heading: &str) -> Vec<NodeId> {
    tables(doc, doc.root())
        .into_iter()
        .filter(|table| {
            rows(doc, *table)
                .first()
                .is_some_and(|row| normalize_space(&doc.content(*row)).contains(heading))
        })
        .collect()
}
