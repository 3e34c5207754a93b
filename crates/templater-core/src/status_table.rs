//! Checkbox groups keyed by a status vocabulary
//!
//! A summary table has one cell per group (`Control Origination`,
//! `Implementation Status`). Each paragraph in that cell holding a checkbox
//! is matched to a key by its label text.

use crate::error::TemplaterError;
use crate::locator::locate_section;
use shared_docx::select::{concat_text, paragraphs, text_runs};
use shared_docx::{find_checkbox_tag, CheckBox, NodeId, XmlDocument};
use shared_types::{ImplementationKey, OriginKey, StatusKey};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct StatusTable<K: StatusKey> {
    cell: NodeId,
    checkboxes: BTreeMap<K, CheckBox>,
}

pub type ControlOrigination = StatusTable<OriginKey>;
pub type ImplementationStatus = StatusTable<ImplementationKey>;

impl<K: StatusKey> StatusTable<K> {
    /// Find the group's cell in `table` and bind its checkboxes
    pub fn find(doc: &XmlDocument, table: NodeId) -> Result<Self, TemplaterError> {
        let cell = locate_section(doc, table, K::FIELD)?;
        Ok(Self::from_cell(doc, cell))
    }

    /// Bind every recognizable checkbox paragraph in `cell`. The first
    /// paragraph for a key wins.
    pub fn from_cell(doc: &XmlDocument, cell: NodeId) -> Self {
        let mut checkboxes = BTreeMap::new();
        for paragraph in paragraphs(doc, cell) {
            let Some(tag) = find_checkbox_tag(doc, paragraph) else {
                continue;
            };
            let runs = text_runs(doc, paragraph);
            if runs.is_empty() {
                continue;
            }
            let label = concat_text(doc, &runs);
            let Some(key) = K::detect_from_doc(&label) else {
                debug!(field = K::FIELD, label = %label, "Unrecognized checkbox label");
                continue;
            };
            if checkboxes.contains_key(&key) {
                continue;
            }
            match CheckBox::bind(doc, tag, runs) {
                Some(checkbox) => {
                    checkboxes.insert(key, checkbox);
                }
                None => debug!(field = K::FIELD, ?key, "Checkbox without a checked value"),
            }
        }
        Self { cell, checkboxes }
    }

    pub fn cell(&self) -> NodeId {
        self.cell
    }

    pub fn checkbox(&self, key: K) -> Option<&CheckBox> {
        self.checkboxes.get(&key)
    }

    /// Keys with a bound checkbox, in vocabulary order
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.checkboxes.keys().copied()
    }

    /// Keys whose checkbox is currently checked
    pub fn checked(&self, doc: &XmlDocument) -> BTreeSet<K> {
        self.checkboxes
            .iter()
            .filter(|(_, checkbox)| checkbox.is_checked(doc))
            .map(|(key, _)| *key)
            .collect()
    }

    /// Check the boxes for `keys`. Boxes already checked stay checked and
    /// nothing is ever unchecked.
    pub fn set_checked(&self, doc: &mut XmlDocument, control: &str, keys: &BTreeSet<K>) {
        for key in keys {
            match self.checkboxes.get(key) {
                Some(checkbox) => checkbox.set_checked_to(doc, true),
                None => warn!(
                    control,
                    field = K::FIELD,
                    ?key,
                    "No checkbox in the document for this value"
                ),
            }
        }
    }
}
