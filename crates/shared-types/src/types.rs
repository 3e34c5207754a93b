use crate::source::Source;
use std::fmt;
use std::io;

/// One side of a discrepancy: the text as it appears in a source
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReportField {
    pub source: Source,
    pub text: String,
}

impl ReportField {
    pub fn new(source: Source, text: impl Into<String>) -> Self {
        Self {
            source,
            text: text.into(),
        }
    }
}

/// A discrepancy between the SSP and the OpenControl data for one field of one control
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiffReport {
    pub control: String, // e.g., "AC-2 (1)"
    pub field: String,   // e.g., "Responsible Role"
    pub first: ReportField,
    pub second: ReportField,
}

impl DiffReport {
    pub fn new(
        control: impl Into<String>,
        field: impl Into<String>,
        first: ReportField,
        second: ReportField,
    ) -> Self {
        Self {
            control: control.into(),
            field: field.into(),
            first,
            second,
        }
    }

    /// Write the canonical one-line rendering
    pub fn write_text_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Control: {}. {} in {}: \"{}\". {} in {}: \"{}\".",
            self.control,
            self.field,
            self.first.source,
            self.first.text,
            self.field,
            self.second.source,
            self.second.text
        )
    }
}

/// All discrepancies found in one document
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DocumentDiff {
    pub document: String,
    pub reports: Vec<DiffReport>,
    pub checked_at: u64,
}

impl DocumentDiff {
    pub fn is_clean(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn role_report() -> DiffReport {
        DiffReport::new(
            "AC-2 (1)",
            "Responsible Role",
            ReportField::new(Source::Ssp, "OpenControl Role Placeholder"),
            ReportField::new(Source::Yaml, "Amazon Elastic Compute Cloud: AWS Staff"),
        )
    }

    #[test]
    fn test_renders_canonical_text() {
        assert_eq!(
            role_report().to_string(),
            "Control: AC-2 (1). Responsible Role in SSP: \"OpenControl Role Placeholder\". \
             Responsible Role in YAML: \"Amazon Elastic Compute Cloud: AWS Staff\".\n"
        );
    }

    #[test]
    fn test_write_text_to_appends() {
        let mut buffer = Vec::new();
        role_report().write_text_to(&mut buffer).unwrap();
        role_report().write_text_to(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_document_diff_json() {
        let diff = DocumentDiff {
            document: "ssp.docx".to_string(),
            reports: vec![role_report()],
            checked_at: 0,
        };
        assert!(!diff.is_clean());
        let json = diff.to_json().unwrap();
        assert!(json.contains("\"source\": \"SSP\""));
        assert!(json.contains("\"control\": \"AC-2 (1)\""));
    }
}
