//! WordprocessingML selectors over [`XmlDocument`]
//!
//! Each helper mirrors one XPath expression the templater relies on, e.g.
//! `cells_starting_with` is `.//w:tc[starts-with(normalize-space(.), label)]`.

use crate::xml::{NodeId, XmlDocument};

/// Main WordprocessingML namespace prefix
pub const W: &str = "w";

const XML_SPACE: &str = "xml:space";

/// XPath `normalize-space`: trim and collapse internal whitespace runs
pub fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `.//w:<local>`
pub fn descendants_named(doc: &XmlDocument, root: NodeId, local: &str) -> Vec<NodeId> {
    doc.search(root, |d, id| d.is_element(id, W, local))
}

/// `.//*[local-name()='<local>']`
pub fn descendants_with_local_name(doc: &XmlDocument, root: NodeId, local: &str) -> Vec<NodeId> {
    doc.search(root, |d, id| d.local_name(id) == Some(local))
}

/// `./w:<local>`
pub fn children_named(doc: &XmlDocument, parent: NodeId, local: &str) -> Vec<NodeId> {
    doc.children(parent)
        .iter()
        .copied()
        .filter(|id| doc.is_element(*id, W, local))
        .collect()
}

/// Table cells whose normalized text starts with `label`
pub fn cells_starting_with(doc: &XmlDocument, root: NodeId, label: &str) -> Vec<NodeId> {
    doc.search(root, |d, id| {
        d.is_element(id, W, "tc") && normalize_space(&d.content(id)).starts_with(label)
    })
}

/// Leaf text runs (`w:t`) in document order
pub fn text_runs(doc: &XmlDocument, root: NodeId) -> Vec<NodeId> {
    descendants_named(doc, root, "t")
}

pub fn paragraphs(doc: &XmlDocument, root: NodeId) -> Vec<NodeId> {
    descendants_named(doc, root, "p")
}

pub fn tables(doc: &XmlDocument, root: NodeId) -> Vec<NodeId> {
    descendants_named(doc, root, "tbl")
}

pub fn rows(doc: &XmlDocument, table: NodeId) -> Vec<NodeId> {
    children_named(doc, table, "tr")
}

pub fn cells(doc: &XmlDocument, row: NodeId) -> Vec<NodeId> {
    children_named(doc, row, "tc")
}

/// Join the text of several runs, as a reader would see them
pub fn concat_text(doc: &XmlDocument, runs: &[NodeId]) -> String {
    runs.iter().map(|id| doc.content(*id)).collect()
}

/// Write `text` into the first run and blank the others, so a value split
/// across runs by Word's formatting collapses into one
pub fn write_runs(doc: &mut XmlDocument, runs: &[NodeId], text: &str) {
    for (index, run) in runs.iter().enumerate() {
        if index == 0 {
            // Word strips edge whitespace from runs without xml:space
            if text.trim() != text {
                doc.set_attr(*run, XML_SPACE, "preserve");
            }
            doc.set_content(*run, text);
        } else {
            doc.set_content(*run, "");
        }
    }
}
