//! `Parameter <id>: <value>` cells of a summary table

use crate::error::TemplaterError;
use crate::locator::{locate_all, FieldCell};
use lazy_static::lazy_static;
use regex::Regex;
use shared_docx::select::write_runs;
use shared_docx::{NodeId, XmlDocument};

pub const PARAMETER_FIELD: &str = "Parameter";

lazy_static! {
    /// Greedy: the id runs up to the last colon
    static ref PARAMETER_PATTERN: Regex = Regex::new(r"Parameter (.+):(.+)").unwrap();
}

#[derive(Debug, Clone)]
pub struct Parameter {
    field: FieldCell,
}

impl Parameter {
    /// All parameter cells of a table, in document order
    pub fn find_all(doc: &XmlDocument, table: NodeId) -> Result<Vec<Self>, TemplaterError> {
        Ok(locate_all(doc, table, PARAMETER_FIELD)?
            .into_iter()
            .map(|field| Self { field })
            .collect())
    }

    pub fn cell(&self) -> NodeId {
        self.field.cell
    }

    /// `(id, value)` as written in the document
    pub fn read(&self, doc: &XmlDocument) -> Result<(String, String), TemplaterError> {
        parse_parameter(&doc.content(self.field.cell))
    }

    pub fn id(&self, doc: &XmlDocument) -> Result<String, TemplaterError> {
        self.read(doc).map(|(id, _)| id)
    }

    pub fn value(&self, doc: &XmlDocument) -> Result<String, TemplaterError> {
        self.read(doc).map(|(_, value)| value)
    }

    /// Rewrite the cell as `Parameter <id>: <value>`, keeping the id
    pub fn set_value(&self, doc: &mut XmlDocument, value: &str) -> Result<(), TemplaterError> {
        let id = self.id(doc)?;
        write_runs(doc, &self.field.runs, &format_parameter(&id, value));
        Ok(())
    }
}

/// Split cell text into a space-free id and a trimmed value
pub fn parse_parameter(text: &str) -> Result<(String, String), TemplaterError> {
    let captures = PARAMETER_PATTERN
        .captures(text)
        .ok_or_else(|| TemplaterError::MalformedField {
            field: PARAMETER_FIELD.to_string(),
            text: text.to_string(),
        })?;
    let id = captures[1].replace(' ', "").trim().to_string();
    let value = captures[2].trim().to_string();
    Ok((id, value))
}

pub fn format_parameter(id: &str, value: &str) -> String {
    format!("{} {}: {}", PARAMETER_FIELD, id, value)
}
