//! ZIP container abstraction for presentation packages.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use std::sync::Arc;

type Archive = zip::ZipArchive<Cursor<Arc<[u8]>>>;

/// Read-only view over an opened presentation package.
///
/// Part names are case-sensitive, forward-slash delimited paths such as
/// `ppt/slides/slide1.xml`. Every read works on its own clone of the
/// archive handle (the underlying bytes and central directory are shared),
/// so a `&Package` can be handed to several worker threads at once.
#[derive(Clone)]
pub struct Package {
    archive: Archive,
}

impl Package {
    /// Open a package from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pptdeck::Package;
    ///
    /// let package = Package::open("slides.pptx")?;
    /// println!("{} parts", package.part_names().len());
    /// # Ok::<(), pptdeck::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create a package from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let cursor = Cursor::new(Arc::<[u8]>::from(data));
        let archive = zip::ZipArchive::new(cursor)?;
        Ok(Self { archive })
    }

    /// Create a package from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Read a part as text.
    ///
    /// Handles UTF-8 (with or without BOM) and UTF-16 LE/BE parts.
    pub fn read_text(&self, path: &str) -> Result<String> {
        let bytes = self.read_bytes(path)?;
        decode_xml_bytes(&bytes)
    }

    /// Read a part as raw bytes.
    pub fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.clone();
        let mut file = archive.by_name(path).map_err(|err| match err {
            zip::result::ZipError::FileNotFound => Error::PartNotFound(path.to_string()),
            other => Error::from(other),
        })?;
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Check if a part exists in the package.
    pub fn exists(&self, path: &str) -> bool {
        self.archive.index_for_name(path).is_some()
    }

    /// List all part names in the package.
    pub fn part_names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }

    /// List part names matching a prefix.
    pub fn part_names_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.archive
            .file_names()
            .filter(|n| n.starts_with(prefix))
            .map(String::from)
            .collect()
    }

    /// Number of parts in the package.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Whether the package has no parts at all.
    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }
}

impl std::fmt::Debug for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Package")
            .field("parts", &self.archive.len())
            .finish()
    }
}

/// Rewrite a UTF-16 encoding declaration once the text is already UTF-8.
fn fix_xml_encoding_declaration(content: &str) -> String {
    if content.starts_with("<?xml") {
        if let Some(end_decl) = content.find("?>") {
            let decl = &content[..end_decl + 2];
            let rest = &content[end_decl + 2..];

            let fixed_decl = decl
                .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='UTF-16'", "encoding='UTF-8'")
                .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='utf-16'", "encoding='UTF-8'");

            return format!("{}{}", fixed_decl, rest);
        }
    }
    content.to_string()
}

/// Decode XML bytes handling UTF-8 and UTF-16 (LE/BE) encodings.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8(rest.to_vec())
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)));
    }

    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        let content = decode_utf16(rest, u16::from_le_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let content = decode_utf16(rest, u16::from_be_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(_) => {
            // ASCII markup in UTF-16 has a zero byte in every other position
            if bytes.len() >= 4 && bytes[1] == 0 && bytes[3] == 0 {
                decode_utf16(bytes, u16::from_le_bytes)
            } else if bytes.len() >= 4 && bytes[0] == 0 && bytes[2] == 0 {
                decode_utf16(bytes, u16::from_be_bytes)
            } else {
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));

    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
