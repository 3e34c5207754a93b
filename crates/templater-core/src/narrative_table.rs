//! "What is the solution and how is it implemented?" tables
//!
//! Either one row per part (`Part a` | text) or, for controls without
//! parts, a single text cell under the heading.

use crate::error::TemplaterError;
use crate::table::Table;
use lazy_static::lazy_static;
use opencontrols::OpenControlData;
use regex::Regex;
use shared_docx::select::{cells, normalize_space, paragraphs, rows, text_runs, write_runs, W};
use shared_docx::{NodeId, QName, XmlDocument};
use tracing::debug;

lazy_static! {
    static ref PART_PATTERN: Regex = Regex::new(r"^Part\s+([A-Za-z0-9]+)").unwrap();
}

/// One writable narrative cell and the part it answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeSection {
    pub part: Option<String>,
    pub cell: NodeId,
}

#[derive(Debug, Clone)]
pub struct NarrativeTable {
    table: Table,
    sections: Vec<NarrativeSection>,
}

impl NarrativeTable {
    pub fn new(doc: &XmlDocument, root: NodeId) -> Result<Self, TemplaterError> {
        let table = Table::new(root);
        let body: Vec<Vec<NodeId>> = rows(doc, root)
            .into_iter()
            .skip(1)
            .map(|row| cells(doc, row))
            .collect();

        let sections = match body.as_slice() {
            [only] if only.len() == 1 => vec![NarrativeSection {
                part: None,
                cell: only[0],
            }],
            _ => body
                .iter()
                .filter_map(|row| match row.as_slice() {
                    [label, value, ..] => {
                        part_key(&doc.content(*label)).map(|part| NarrativeSection {
                            part: Some(part),
                            cell: *value,
                        })
                    }
                    _ => None,
                })
                .collect(),
        };
        Ok(Self { table, sections })
    }

    pub fn control_name(&self, doc: &XmlDocument) -> Result<String, TemplaterError> {
        self.table.control_name(doc)
    }

    pub fn sections(&self) -> &[NarrativeSection] {
        &self.sections
    }

    /// Write the narrative for each section. Sections with no narrative in
    /// the data keep their current text.
    pub fn fill(
        &self,
        doc: &mut XmlDocument,
        data: &OpenControlData,
    ) -> Result<(), TemplaterError> {
        let control = self.control_name(doc)?;
        for section in &self.sections {
            let text = data.get_narrative(&control, section.part.as_deref());
            if text.is_empty() {
                debug!(control, part = ?section.part, "No narrative for section");
                continue;
            }
            write_cell_text(doc, section.cell, &text);
        }
        Ok(())
    }
}

/// `Part a` -> `a`
pub fn part_key(label: &str) -> Option<String> {
    PART_PATTERN
        .captures(&normalize_space(label))
        .map(|captures| captures[1].to_lowercase())
}

/// Replace the text of a cell, creating a paragraph and run when it has none
fn write_cell_text(doc: &mut XmlDocument, cell: NodeId, text: &str) {
    let runs = text_runs(doc, cell);
    if !runs.is_empty() {
        write_runs(doc, &runs, text);
        return;
    }
    let paragraph = match paragraphs(doc, cell).first() {
        Some(paragraph) => *paragraph,
        None => doc.append_element(cell, QName::new(W, "p")),
    };
    let run = doc.append_element(paragraph, QName::new(W, "r"));
    let text_run = doc.append_element(run, QName::new(W, "t"));
    doc.append_text(text_run, text);
}
