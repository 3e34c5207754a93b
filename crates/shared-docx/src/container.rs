//! DOCX zip container
//!
//! Only `word/document.xml` is parsed. Every other part is carried through
//! unchanged so that saving a document never touches styles, numbering or
//! media.

use crate::error::DocxError;
use crate::xml::XmlDocument;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Main document part inside a DOCX archive
pub const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Clone)]
struct Part {
    name: String,
    data: Vec<u8>,
    compression: CompressionMethod,
}

/// A loaded Word document
#[derive(Debug, Clone)]
pub struct Docx {
    parts: Vec<Part>,
    document: XmlDocument,
}

impl Docx {
    /// Load a DOCX file from disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocxError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Parse DOCX bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocxError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut parts = Vec::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if !file.is_file() {
                continue;
            }
            let mut data = Vec::new();
            file.read_to_end(&mut data)?;
            parts.push(Part {
                name: file.name().to_string(),
                data,
                compression: file.compression(),
            });
        }

        let document = parse_document_part(&parts)?;
        Ok(Self { parts, document })
    }

    /// Build a document from raw `(name, bytes)` parts, e.g. for fixtures
    pub fn from_parts(parts: Vec<(String, Vec<u8>)>) -> Result<Self, DocxError> {
        let parts: Vec<Part> = parts
            .into_iter()
            .map(|(name, data)| Part {
                name,
                data,
                compression: CompressionMethod::Deflated,
            })
            .collect();
        let document = parse_document_part(&parts)?;
        Ok(Self { parts, document })
    }

    /// Serialize back to DOCX bytes with the current document tree
    pub fn to_bytes(&self) -> Result<Vec<u8>, DocxError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let document_xml = self.document.to_xml_string();

        for part in &self.parts {
            let compression = match part.compression {
                CompressionMethod::Stored => CompressionMethod::Stored,
                _ => CompressionMethod::Deflated,
            };
            let options = SimpleFileOptions::default().compression_method(compression);
            writer.start_file(part.name.as_str(), options)?;
            if part.name == DOCUMENT_PART {
                writer.write_all(document_xml.as_bytes())?;
            } else {
                writer.write_all(&part.data)?;
            }
        }

        Ok(writer.finish()?.into_inner())
    }

    /// Write the DOCX to disk
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocxError> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    pub fn document(&self) -> &XmlDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut XmlDocument {
        &mut self.document
    }

    /// Names of all parts in archive order
    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.name.as_str()).collect()
    }
}

fn parse_document_part(parts: &[Part]) -> Result<XmlDocument, DocxError> {
    let part = parts
        .iter()
        .find(|part| part.name == DOCUMENT_PART)
        .ok_or_else(|| DocxError::MissingPart(DOCUMENT_PART.to_string()))?;
    let xml = std::str::from_utf8(&part.data)
        .map_err(|_| DocxError::Utf8(DOCUMENT_PART.to_string()))?;
    XmlDocument::parse(xml)
}
