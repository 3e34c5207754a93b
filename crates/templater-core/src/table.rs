//! Control tables and their headings

use crate::error::TemplaterError;
use lazy_static::lazy_static;
use regex::Regex;
use shared_docx::select::{cells, normalize_space, rows};
use shared_docx::{NodeId, XmlDocument};

lazy_static! {
    /// `AC-2`, `AC-2 (1)`, `AC-2(1)`
    static ref CONTROL_NAME_PATTERN: Regex =
        Regex::new(r"([A-Z]{2})-(\d+)(?:\s*\(\s*(\d+)\s*\))?").unwrap();
}

/// A `w:tbl` describing one control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    root: NodeId,
}

impl Table {
    pub fn new(root: NodeId) -> Self {
        Self { root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Normalized text of the first cell of the first row
    pub fn heading(&self, doc: &XmlDocument) -> String {
        rows(doc, self.root)
            .first()
            .and_then(|row| cells(doc, *row).first().copied())
            .map(|cell| normalize_space(&doc.content(cell)))
            .unwrap_or_default()
    }

    /// Control name from the heading, e.g. `AC-2 (1)`
    pub fn control_name(&self, doc: &XmlDocument) -> Result<String, TemplaterError> {
        let heading = self.heading(doc);
        parse_control_name(&heading).ok_or(TemplaterError::ControlNameNotFound { heading })
    }
}

/// Extract and normalize the first control name in `text`
pub fn parse_control_name(text: &str) -> Option<String> {
    let captures = CONTROL_NAME_PATTERN.captures(text)?;
    let mut name = format!("{}-{}", &captures[1], &captures[2]);
    if let Some(enhancement) = captures.get(3) {
        name.push_str(&format!(" ({})", enhancement.as_str()));
    }
    Some(name)
}
