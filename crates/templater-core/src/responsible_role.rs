//! The `Responsible Role:` cell of a summary table

use crate::error::TemplaterError;
use crate::locator::{locate_unique, FieldCell};
use shared_docx::select::{normalize_space, write_runs};
use shared_docx::{NodeId, XmlDocument};

pub const RESPONSIBLE_ROLE_FIELD: &str = "Responsible Role";

#[derive(Debug, Clone)]
pub struct ResponsibleRole {
    field: FieldCell,
}

impl ResponsibleRole {
    pub fn find(doc: &XmlDocument, table: NodeId) -> Result<Self, TemplaterError> {
        let field = locate_unique(doc, table, RESPONSIBLE_ROLE_FIELD)?;
        Ok(Self { field })
    }

    pub fn cell(&self) -> NodeId {
        self.field.cell
    }

    /// The role text after the label and its colon
    pub fn value(&self, doc: &XmlDocument) -> String {
        let text = normalize_space(&doc.content(self.field.cell));
        let rest = text
            .strip_prefix(RESPONSIBLE_ROLE_FIELD)
            .unwrap_or(&text)
            .trim_start();
        rest.strip_prefix(':').unwrap_or(rest).trim().to_string()
    }

    /// An empty role means the template was never filled in
    pub fn is_default_value(value: &str) -> bool {
        value.trim().is_empty()
    }

    /// Replace the whole cell text with `Responsible Role: <value>`
    pub fn set_value(&self, doc: &mut XmlDocument, value: &str) {
        let text = format!("{}: {}", RESPONSIBLE_ROLE_FIELD, value);
        write_runs(doc, &self.field.runs, &text);
    }
}
