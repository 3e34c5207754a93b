//! Arena-backed XML tree
//!
//! Nodes live in a single `Vec` owned by [`XmlDocument`] and are addressed by
//! [`NodeId`] handles. Handles stay valid for the lifetime of the document;
//! removing children only detaches them, so a stale handle never points at a
//! different node.

use crate::error::DocxError;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fmt;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Handle to a node inside an [`XmlDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Namespace-qualified element or attribute name, e.g. `w:tc`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub prefix: Option<String>,
    pub local: String,
}

impl QName {
    pub fn new(prefix: &str, local: &str) -> Self {
        Self {
            prefix: Some(prefix.to_string()),
            local: local.to_string(),
        }
    }

    /// Split a raw `prefix:local` name
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((prefix, local)) => Self::new(prefix, local),
            None => Self {
                prefix: None,
                local: raw.to_string(),
            },
        }
    }

    pub fn is(&self, prefix: &str, local: &str) -> bool {
        self.prefix.as_deref() == Some(prefix) && self.local == local
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local),
            None => f.write_str(&self.local),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        name: QName,
        attributes: Vec<Attribute>,
    },
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed XML document with mutable, ordered nodes
#[derive(Debug, Clone)]
pub struct XmlDocument {
    nodes: Vec<Node>,
    root: NodeId,
    declaration: bool,
}

impl XmlDocument {
    /// Parse an XML string.
    ///
    /// Whitespace-only text between elements is dropped unless it sits inside
    /// a text run (`<w:t>`), where Word treats it as content.
    pub fn parse(xml: &str) -> Result<Self, DocxError> {
        let mut reader = Reader::from_str(xml);
        let mut doc = XmlDocument {
            nodes: Vec::new(),
            root: NodeId(0),
            declaration: false,
        };
        let mut root_seen = false;
        let mut stack: Vec<NodeId> = Vec::new();

        loop {
            let position = reader.buffer_position() as usize;
            match reader.read_event() {
                Ok(Event::Decl(_)) => doc.declaration = true,
                Ok(Event::Start(start)) => {
                    if stack.is_empty() && root_seen {
                        return Err(xml_error(position, "multiple root elements"));
                    }
                    let kind = element_kind(&start, position)?;
                    let id = doc.alloc(stack.last().copied(), kind);
                    if !root_seen {
                        doc.root = id;
                        root_seen = true;
                    }
                    stack.push(id);
                }
                Ok(Event::Empty(start)) => {
                    if stack.is_empty() && root_seen {
                        return Err(xml_error(position, "multiple root elements"));
                    }
                    let kind = element_kind(&start, position)?;
                    let id = doc.alloc(stack.last().copied(), kind);
                    if !root_seen {
                        doc.root = id;
                        root_seen = true;
                    }
                }
                Ok(Event::End(_)) => {
                    stack.pop();
                }
                Ok(Event::Text(text)) => {
                    let Some(parent) = stack.last().copied() else {
                        continue;
                    };
                    let text = text.unescape().map_err(|e| xml_error(position, e))?;
                    if text.trim().is_empty() && doc.local_name(parent) != Some("t") {
                        continue;
                    }
                    doc.alloc(Some(parent), NodeKind::Text(text.into_owned()));
                }
                Ok(Event::CData(data)) => {
                    if let Some(parent) = stack.last().copied() {
                        let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                        doc.alloc(Some(parent), NodeKind::Text(text));
                    }
                }
                Ok(Event::Comment(comment)) => {
                    if let Some(parent) = stack.last().copied() {
                        let text = String::from_utf8_lossy(&comment.into_inner()).into_owned();
                        doc.alloc(Some(parent), NodeKind::Comment(text));
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(xml_error(position, e)),
            }
        }

        if !root_seen {
            return Err(DocxError::EmptyDocument);
        }
        if !stack.is_empty() {
            return Err(xml_error(xml.len(), "unclosed element at end of input"));
        }
        Ok(doc)
    }

    /// Serialize the tree back to XML
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        if self.declaration {
            out.push_str(XML_DECLARATION);
            out.push_str("\r\n");
        }
        self.write_node(self.root, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        match &node.kind {
            NodeKind::Element { name, attributes } => {
                out.push_str(&format!("<{}", name));
                for attribute in attributes {
                    out.push_str(&format!(
                        " {}=\"{}\"",
                        attribute.name,
                        escape(attribute.value.as_str())
                    ));
                }
                if node.children.is_empty() {
                    out.push_str("/>");
                    return;
                }
                out.push('>');
                for child in &node.children {
                    self.write_node(*child, out);
                }
                out.push_str(&format!("</{}>", name));
            }
            NodeKind::Text(text) => out.push_str(&escape(text.as_str())),
            NodeKind::Comment(text) => out.push_str(&format!("<!--{}-->", text)),
        }
    }

    fn alloc(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    /// The document element
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Element name, or `None` for text and comment nodes
    pub fn name(&self, id: NodeId) -> Option<&QName> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn local_name(&self, id: NodeId) -> Option<&str> {
        self.name(id).map(|name| name.local.as_str())
    }

    /// True if the node is an element named `prefix:local`
    pub fn is_element(&self, id: NodeId, prefix: &str, local: &str) -> bool {
        self.name(id).is_some_and(|name| name.is(prefix, local))
    }

    /// All descendants of `id` in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut pending: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = pending.pop() {
            found.push(next);
            pending.extend(self.children(next).iter().rev().copied());
        }
        found
    }

    /// Descendants of `root` matching `predicate`, in document order
    pub fn search<F>(&self, root: NodeId, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&XmlDocument, NodeId) -> bool,
    {
        self.descendants(root)
            .into_iter()
            .filter(|id| predicate(self, *id))
            .collect()
    }

    /// Concatenated text of the node and all its descendants
    pub fn content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        match &node.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for child in &node.children {
                    self.collect_text(*child, out);
                }
            }
            NodeKind::Comment(_) => {}
        }
    }

    /// Replace the node's content with `text`. For an element this drops all
    /// children in favour of a single text node.
    pub fn set_content(&mut self, id: NodeId, text: &str) {
        if let NodeKind::Text(existing) = &mut self.nodes[id.0].kind {
            *existing = text.to_string();
            return;
        }
        for child in std::mem::take(&mut self.nodes[id.0].children) {
            self.nodes[child.0].parent = None;
        }
        if !text.is_empty() {
            self.alloc(Some(id), NodeKind::Text(text.to_string()));
        }
    }

    /// Attribute value looked up by local name, ignoring the prefix
    pub fn attr(&self, id: NodeId, local: &str) -> Option<&str> {
        self.attribute_list(id)
            .iter()
            .find(|attribute| attribute.name.local == local)
            .map(|attribute| attribute.value.as_str())
    }

    pub fn attribute_list(&self, id: NodeId) -> &[Attribute] {
        match &self.nodes[id.0].kind {
            NodeKind::Element { attributes, .. } => attributes,
            _ => &[],
        }
    }

    /// Set an attribute. An unprefixed `name` matches an existing attribute
    /// by local name alone and keeps its prefix; `xml:space` style names must
    /// match both parts. Missing attributes are added as given. No-op on
    /// non-elements.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        let name = QName::parse(name);
        if let NodeKind::Element { attributes, .. } = &mut self.nodes[id.0].kind {
            let existing = attributes.iter_mut().find(|a| {
                a.name.local == name.local
                    && (name.prefix.is_none() || a.name.prefix == name.prefix)
            });
            match existing {
                Some(attribute) => attribute.value = value.to_string(),
                None => attributes.push(Attribute {
                    name,
                    value: value.to_string(),
                }),
            }
        }
    }

    /// Append a new empty element as the last child of `parent`
    pub fn append_element(&mut self, parent: NodeId, name: QName) -> NodeId {
        self.alloc(
            Some(parent),
            NodeKind::Element {
                name,
                attributes: Vec::new(),
            },
        )
    }

    /// Append a text node as the last child of `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.alloc(Some(parent), NodeKind::Text(text.to_string()))
    }
}

fn element_kind(start: &BytesStart<'_>, position: usize) -> Result<NodeKind, DocxError> {
    let name = QName::parse(&String::from_utf8_lossy(start.name().as_ref()));
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| xml_error(position, e))?;
        let value = attribute
            .unescape_value()
            .map_err(|e| xml_error(position, e))?;
        attributes.push(Attribute {
            name: QName::parse(&String::from_utf8_lossy(attribute.key.as_ref())),
            value: value.into_owned(),
        });
    }
    Ok(NodeKind::Element { name, attributes })
}

fn xml_error(position: usize, err: impl fmt::Display) -> DocxError {
    DocxError::Xml {
        position,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p>
      <w:r><w:t>Responsible </w:t></w:r>
      <w:r><w:t xml:space="preserve"> </w:t></w:r>
      <w:r><w:t>Role: A &amp; B</w:t></w:r>
    </w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_parse_keeps_run_whitespace_only() {
        let doc = XmlDocument::parse(SAMPLE).unwrap();
        let body = doc.children(doc.root())[0];
        assert!(doc.is_element(body, "w", "body"));
        assert_eq!(doc.content(doc.root()), "Responsible  Role: A & B");
    }

    #[test]
    fn test_roundtrip_escapes_text() {
        let doc = XmlDocument::parse(SAMPLE).unwrap();
        let xml = doc.to_xml_string();
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains("<w:t>Role: A &amp; B</w:t>"));
        assert!(xml.contains(r#"<w:t xml:space="preserve"> </w:t>"#));

        let reparsed = XmlDocument::parse(&xml).unwrap();
        assert_eq!(reparsed.content(reparsed.root()), doc.content(doc.root()));
    }

    #[test]
    fn test_search_is_document_order() {
        let doc = XmlDocument::parse(SAMPLE).unwrap();
        let runs = doc.search(doc.root(), |d, id| d.is_element(id, "w", "t"));
        let texts: Vec<String> = runs.iter().map(|id| doc.content(*id)).collect();
        assert_eq!(texts, vec!["Responsible ", " ", "Role: A & B"]);
    }

    #[test]
    fn test_set_content_replaces_children() {
        let mut doc = XmlDocument::parse(SAMPLE).unwrap();
        let paragraph = doc.search(doc.root(), |d, id| d.is_element(id, "w", "p"))[0];
        let runs = doc.search(paragraph, |d, id| d.is_element(id, "w", "t"));

        doc.set_content(runs[0], "Filled");
        doc.set_content(runs[1], "");
        doc.set_content(runs[2], "");

        assert_eq!(doc.content(paragraph), "Filled");
        assert!(doc.to_xml_string().contains("<w:t>Filled</w:t>"));
        assert_eq!(
            doc.parent(runs[0]).map(|p| doc.local_name(p)),
            Some(Some("r"))
        );
    }

    #[test]
    fn test_attr_matches_local_name() {
        let mut doc =
            XmlDocument::parse(r#"<w14:checked xmlns:w14="urn:w14" w14:val="0"/>"#).unwrap();
        let root = doc.root();
        assert_eq!(doc.attr(root, "val"), Some("0"));

        doc.set_attr(root, "val", "1");
        assert_eq!(doc.attr(root, "val"), Some("1"));
        assert_eq!(doc.attribute_list(root)[1].name.to_string(), "w14:val");
        assert!(doc.to_xml_string().contains(r#"w14:val="1""#));
    }

    #[test]
    fn test_set_prefixed_attr() {
        let mut doc = XmlDocument::parse(r#"<w:t xmlns:w="urn:w">a</w:t>"#).unwrap();
        let root = doc.root();

        doc.set_attr(root, "xml:space", "preserve");
        doc.set_attr(root, "xml:space", "preserve");

        assert_eq!(doc.attribute_list(root).len(), 2);
        assert!(doc
            .to_xml_string()
            .contains(r#"<w:t xmlns:w="urn:w" xml:space="preserve">a</w:t>"#));
    }

    #[test]
    fn test_append_element_and_text() {
        let mut doc = XmlDocument::parse("<w:p/>").unwrap();
        let run = doc.append_element(doc.root(), QName::new("w", "r"));
        let text = doc.append_element(run, QName::new("w", "t"));
        doc.append_text(text, "x < y");
        assert_eq!(
            doc.to_xml_string(),
            "<w:p><w:r><w:t>x &lt; y</w:t></w:r></w:p>"
        );
    }

    #[test]
    fn test_rejects_mismatched_tags() {
        assert!(matches!(
            XmlDocument::parse("<a><b></a>"),
            Err(DocxError::Xml { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(
            XmlDocument::parse("   "),
            Err(DocxError::EmptyDocument)
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn run_text_survives_serialization(text in "[ -~]{0,40}") {
                let mut doc = XmlDocument::parse(
                    r#"<w:p xmlns:w="urn:w"><w:r><w:t>old</w:t></w:r></w:p>"#,
                )
                .unwrap();
                let run = doc.search(doc.root(), |d, id| d.is_element(id, "w", "t"))[0];
                doc.set_content(run, &text);

                let reparsed = XmlDocument::parse(&doc.to_xml_string()).unwrap();
                prop_assert_eq!(reparsed.content(reparsed.root()), text);
            }
        }
    }
}
