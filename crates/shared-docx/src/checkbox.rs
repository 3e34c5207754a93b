//! Content-control checkboxes
//!
//! Word stores a checkbox as a structured document tag:
//!
//! ```text
//! w:sdt
//! ├── w:sdtPr
//! │   └── w14:checkbox            <- check mark
//! │       ├── w14:checked          w14:val="0" | "1"
//! │       ├── w14:checkedState     w14:val="2612" (hex code point)
//! │       └── w14:uncheckedState   w14:val="2610"
//! └── w:sdtContent
//!     └── w:r/w:t                  <- rendered glyph
//! ```
//!
//! The checked flag and the glyph are independent, so toggling has to
//! update both.

use crate::select::{descendants_named, descendants_with_local_name};
use crate::xml::{NodeId, XmlDocument};
use tracing::debug;

const CHECKBOX_ATTRIBUTE_KEY: &str = "val";
const CHECKBOX_CHECKED_VALUE: &str = "1";
const CHECKBOX_NOT_CHECKED_VALUE: &str = "0";
const CHECKBOX_TAG: &str = "checkbox";
const CHECKED_CHILD: &str = "checked";
const CHECKED_STATE_CHILD: &str = "checkedState";
const UNCHECKED_STATE_CHILD: &str = "uncheckedState";
const GLYPH_CONTAINER: &str = "sdtContent";

/// A checkbox in a Word document together with the text runs of its label
#[derive(Debug, Clone)]
pub struct CheckBox {
    check_mark: NodeId,
    text_runs: Vec<NodeId>,
}

impl CheckBox {
    /// Bind a checkbox to its check mark node. Returns `None` when the
    /// `checked` child is missing or carries no value, in which case the
    /// caller should skip the paragraph.
    pub fn bind(doc: &XmlDocument, check_mark: NodeId, text_runs: Vec<NodeId>) -> Option<Self> {
        let checked = single_child(doc, check_mark, CHECKED_CHILD)?;
        match doc.attr(checked, CHECKBOX_ATTRIBUTE_KEY) {
            Some(value) if !value.is_empty() => Some(Self {
                check_mark,
                text_runs,
            }),
            _ => None,
        }
    }

    /// Malformed markup reads as unchecked
    pub fn is_checked(&self, doc: &XmlDocument) -> bool {
        single_child(doc, self.check_mark, CHECKED_CHILD)
            .and_then(|checked| doc.attr(checked, CHECKBOX_ATTRIBUTE_KEY))
            == Some(CHECKBOX_CHECKED_VALUE)
    }

    /// Set the checked flag and swap the rendered glyph to match
    pub fn set_checked_to(&self, doc: &mut XmlDocument, value: bool) {
        let Some(checked) = single_child(doc, self.check_mark, CHECKED_CHILD) else {
            return;
        };
        let flag = if value {
            CHECKBOX_CHECKED_VALUE
        } else {
            CHECKBOX_NOT_CHECKED_VALUE
        };
        doc.set_attr(checked, CHECKBOX_ATTRIBUTE_KEY, flag);

        let state_child = if value {
            CHECKED_STATE_CHILD
        } else {
            UNCHECKED_STATE_CHILD
        };
        let Some(glyph) = single_child(doc, self.check_mark, state_child)
            .and_then(|state| doc.attr(state, CHECKBOX_ATTRIBUTE_KEY))
            .and_then(parse_code_point)
        else {
            debug!(state_child, "checkbox has no usable state glyph");
            return;
        };

        let Some(glyph_run) = self.glyph_run(doc) else {
            debug!("checkbox glyph run not found");
            return;
        };
        doc.set_content(glyph_run, &glyph.to_string());
    }

    /// Label text next to the box, including the glyph itself
    pub fn text_value(&self, doc: &XmlDocument) -> String {
        crate::select::concat_text(doc, &self.text_runs)
    }

    // check mark -> w:sdtPr -> w:sdt, then .//w:sdtContent//w:t
    fn glyph_run(&self, doc: &XmlDocument) -> Option<NodeId> {
        let sdt = doc.parent(self.check_mark).and_then(|pr| doc.parent(pr))?;
        let runs: Vec<NodeId> = descendants_named(doc, sdt, GLYPH_CONTAINER)
            .into_iter()
            .flat_map(|content| descendants_named(doc, content, "t"))
            .collect();
        match runs.as_slice() {
            [run] => Some(*run),
            _ => None,
        }
    }
}

/// Find the single check mark element inside a paragraph
pub fn find_checkbox_tag(doc: &XmlDocument, paragraph: NodeId) -> Option<NodeId> {
    single_child(doc, paragraph, CHECKBOX_TAG)
}

fn single_child(doc: &XmlDocument, node: NodeId, local: &str) -> Option<NodeId> {
    match descendants_with_local_name(doc, node, local).as_slice() {
        [child] => Some(*child),
        _ => None,
    }
}

fn parse_code_point(hex: &str) -> Option<char> {
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
