//! Builders for SSP documents and OpenControl workspaces

#![allow(dead_code)]

use shared_docx::{Docx, DOCUMENT_PART};
use std::path::Path;
use templater_core::Ssp;

pub const ORIGIN_LABELS: &[&str] = &[
    "Service Provider Corporate",
    "Service Provider System Specific",
    "Service Provider Hybrid (Corporate and System Specific)",
    "Configured by Customer (Customer System Specific)",
    "Provided by Customer (Customer System Specific)",
    "Shared (Service Provider and Customer Responsibility)",
    "Inherited from pre-existing FedRAMP Authorization",
];

pub const STATUS_LABELS: &[&str] = &[
    "Implemented",
    "Partially implemented",
    "Planned",
    "Alternative implementation",
    "Not applicable",
];

pub const EC2_COMPONENT: &str = r#"
name: Amazon Elastic Compute Cloud
key: EC2
responsible_role: AWS Staff
satisfies:
  - standard_key: NIST-800-53
    control_key: AC-2 (1)
    implementation_status: partial
    control_origins:
      - shared
    parameters:
      - key: a
        text: at least annually
    narrative:
      - key: a
        text: Accounts are managed by AWS IAM.
"#;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#;

fn paragraph(text: &str) -> String {
    format!(
        r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#
    )
}

fn cell(body: &str) -> String {
    format!("<w:tc>{body}</w:tc>")
}

fn row(cells: &[String]) -> String {
    format!("<w:tr>{}</w:tr>", cells.concat())
}

fn checkbox_paragraph(label: &str, checked: bool) -> String {
    let (flag, glyph) = if checked {
        ("1", "\u{2612}")
    } else {
        ("0", "\u{2610}")
    };
    format!(
        r#"<w:p><w:sdt><w:sdtPr><w14:checkbox><w14:checked w14:val="{flag}"/><w14:checkedState w14:val="2612" w14:font="MS Gothic"/><w14:uncheckedState w14:val="2610" w14:font="MS Gothic"/></w14:checkbox></w:sdtPr><w:sdtContent><w:r><w:t>{glyph}</w:t></w:r></w:sdtContent></w:sdt><w:r><w:t xml:space="preserve"> {label}</w:t></w:r></w:p>"#
    )
}

fn checkbox_cell(heading: &str, labels: &[&str], checked: &[&str]) -> String {
    let mut body = paragraph(heading);
    for label in labels {
        body.push_str(&checkbox_paragraph(label, checked.contains(label)));
    }
    cell(&body)
}

/// A Control Summary Information table
#[derive(Debug, Clone)]
pub struct SummaryFixture<'a> {
    pub control: &'a str,
    pub role: Option<&'a str>,
    pub parameters: Vec<&'a str>,
    pub checked_statuses: Vec<&'a str>,
    pub checked_origins: Vec<&'a str>,
}

impl<'a> SummaryFixture<'a> {
    pub fn new(control: &'a str) -> Self {
        Self {
            control,
            role: Some(""),
            parameters: Vec::new(),
            checked_statuses: Vec::new(),
            checked_origins: Vec::new(),
        }
    }

    pub fn role(mut self, role: Option<&'a str>) -> Self {
        self.role = role;
        self
    }

    pub fn parameter(mut self, cell_text: &'a str) -> Self {
        self.parameters.push(cell_text);
        self
    }

    pub fn checked_origins(mut self, labels: &[&'a str]) -> Self {
        self.checked_origins = labels.to_vec();
        self
    }

    pub fn checked_statuses(mut self, labels: &[&'a str]) -> Self {
        self.checked_statuses = labels.to_vec();
        self
    }

    pub fn to_xml(&self) -> String {
        let mut rows = vec![row(&[
            cell(&paragraph(self.control)),
            cell(&paragraph("Control Summary Information")),
        ])];
        if let Some(role) = self.role {
            // Label and value in separate runs, as Word tends to save them
            rows.push(row(&[cell(&format!(
                r#"<w:p><w:r><w:t xml:space="preserve">Responsible Role: </w:t></w:r><w:r><w:t>{role}</w:t></w:r></w:p>"#
            ))]));
        }
        for parameter in &self.parameters {
            rows.push(row(&[cell(&paragraph(parameter))]));
        }
        rows.push(row(&[checkbox_cell(
            "Implementation Status (check all that apply):",
            STATUS_LABELS,
            &self.checked_statuses,
        )]));
        rows.push(row(&[checkbox_cell(
            "Control Origination (check all that apply):",
            ORIGIN_LABELS,
            &self.checked_origins,
        )]));
        format!("<w:tbl>{}</w:tbl>", rows.concat())
    }
}

/// A narrative table with one row per part, or a single cell when `parts` is empty
pub fn narrative_table(control: &str, parts: &[&str]) -> String {
    let mut rows = vec![row(&[cell(&paragraph(&format!(
        "{control} What is the solution and how is it implemented?"
    )))])];
    if parts.is_empty() {
        rows.push(row(&[cell("<w:p/>")]));
    }
    for part in parts {
        rows.push(row(&[
            cell(&paragraph(&format!("Part {part}"))),
            cell("<w:p/>"),
        ]));
    }
    format!("<w:tbl>{}</w:tbl>", rows.concat())
}

pub fn document_xml(tables: &[String]) -> String {
    let mut body = String::new();
    for table in tables {
        body.push_str(table);
        body.push_str(&paragraph(""));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:w14="http://schemas.microsoft.com/office/word/2010/wordml"><w:body>{body}</w:body></w:document>"#
    )
}

pub fn ssp(tables: &[String]) -> Ssp {
    let docx = Docx::from_parts(vec![
        ("[Content_Types].xml".to_string(), CONTENT_TYPES.as_bytes().to_vec()),
        (DOCUMENT_PART.to_string(), document_xml(tables).into_bytes()),
    ])
    .unwrap();
    Ssp::from_docx(docx)
}

/// Write `<dir>/components/<key>/component.yaml` for each component
pub fn write_workspace(dir: &Path, components: &[(&str, &str)]) {
    for (key, yaml) in components {
        let component_dir = dir.join("components").join(key);
        std::fs::create_dir_all(&component_dir).unwrap();
        std::fs::write(component_dir.join("component.yaml"), yaml).unwrap();
    }
}
