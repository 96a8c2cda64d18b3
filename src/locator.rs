//! Resource locators — where a piece of content lives.
//!
//! Widgets never carry raw URIs. They carry a [`Locator`], a value that can
//! *produce* a URI, possibly deferring or validating that production:
//!
//! - [`LocalLocator`]: a plain filesystem path → `file://` URI. Total.
//! - [`PageLocator`]: another page's eventual output location. Checked
//!   against the site's page-id registry when the URI is requested, not when
//!   the locator is constructed — so content may reference pages that are
//!   added to the tree later.
//! - [`EmbeddedLocator`]: the resource itself, inlined as a
//!   `data:{mime};base64,...` URI. Reads and encodes its payload at most
//!   once, eagerly or on first request.
//!
//! ## Size Ceiling
//!
//! Embedded resources are capped at [`MAX_EMBEDDED_BYTES`] (20 MiB). The cap
//! is checked for raw byte input at construction and for deferred files both
//! at construction and again before reading (the file may have grown in
//! between).

use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use thiserror::Error;

use crate::site::SharedRegistry;

/// Maximum allowed size of any embedded resource, in bytes.
pub const MAX_EMBEDDED_BYTES: u64 = 20 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("reference to unregistered page id [{0}]")]
    BrokenReference(String),
    #[error("embedded resource is {size} bytes; limit is {limit}")]
    ResourceTooLarge { size: u64, limit: u64 },
    #[error("no MIME type given and no file extension to derive one from: {0}")]
    MissingMimeType(PathBuf),
    #[error("no MIME type given and none known for extension [{0}]")]
    UnknownExtension(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A value that resolves to a URI.
///
/// Resolution may fail: a [`PageLocator`] can point at an id that was never
/// registered, and an [`EmbeddedLocator`] may still have to read its file.
pub trait Locator: fmt::Debug {
    fn uri(&self) -> Result<String, LocatorError>;
}

/// A plain local file path, rendered as a `file://` URI.
#[derive(Debug, Clone)]
pub struct LocalLocator {
    path: PathBuf,
}

impl LocalLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Locator for LocalLocator {
    fn uri(&self) -> Result<String, LocatorError> {
        Ok(format!("file://{}", self.path.display()))
    }
}

/// A reference to another page's eventual output location.
///
/// Construction never validates — forward references to pages not yet added
/// are the point. The id is checked against the registry when [`uri`] is
/// called, and the URI returned is the site-relative output filename, the
/// same string the write-out step uses for that page.
///
/// [`uri`]: Locator::uri
#[derive(Debug, Clone)]
pub struct PageLocator {
    registry: SharedRegistry,
    page_id: String,
}

impl PageLocator {
    pub fn new(registry: SharedRegistry, page_id: impl Into<String>) -> Self {
        Self {
            registry,
            page_id: page_id.into(),
        }
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }
}

impl Locator for PageLocator {
    fn uri(&self) -> Result<String, LocatorError> {
        self.registry.borrow().url_for(&self.page_id)
    }
}

/// A resource inlined as a base64 `data:` URI.
///
/// Holds either already-encoded data or a deferred file path. Deferred files
/// are read and encoded on first [`uri`] call (or eagerly, if requested at
/// construction), and never more than once.
///
/// [`uri`]: Locator::uri
#[derive(Debug)]
pub struct EmbeddedLocator {
    mime_type: String,
    source_path: Option<PathBuf>,
    encoded: RefCell<Option<String>>,
}

impl EmbeddedLocator {
    /// Embed raw bytes with an explicit MIME type. Encodes immediately.
    pub fn from_bytes(mime_type: impl Into<String>, raw: &[u8]) -> Result<Self, LocatorError> {
        if raw.len() as u64 > MAX_EMBEDDED_BYTES {
            return Err(LocatorError::ResourceTooLarge {
                size: raw.len() as u64,
                limit: MAX_EMBEDDED_BYTES,
            });
        }

        Ok(Self {
            mime_type: mime_type.into(),
            source_path: None,
            encoded: RefCell::new(Some(BASE64_STANDARD.encode(raw))),
        })
    }

    /// Embed the contents of a file.
    ///
    /// If `mime_type` is `None` it is derived from the file extension. With
    /// `eager` the file is read and encoded now; otherwise on first URI
    /// request. The size ceiling is enforced either way.
    pub fn from_file(
        path: impl Into<PathBuf>,
        mime_type: Option<&str>,
        eager: bool,
    ) -> Result<Self, LocatorError> {
        let path = path.into();

        check_file_size(&path)?;

        let mime_type = match mime_type {
            Some(m) => m.to_string(),
            None => mime_for_extension(&path)?,
        };

        let locator = Self {
            mime_type,
            source_path: Some(path),
            encoded: RefCell::new(None),
        };

        if eager {
            locator.materialize()?;
        }

        Ok(locator)
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Whether the payload has been read and encoded yet.
    pub fn is_materialized(&self) -> bool {
        self.encoded.borrow().is_some()
    }

    fn materialize(&self) -> Result<(), LocatorError> {
        if self.encoded.borrow().is_some() {
            return Ok(());
        }

        // `from_bytes` always encodes, so a deferred locator has a path.
        let Some(path) = &self.source_path else {
            return Ok(());
        };

        check_file_size(path)?;

        let raw = fs::read(path)?;
        *self.encoded.borrow_mut() = Some(BASE64_STANDARD.encode(&raw));

        Ok(())
    }
}

impl Locator for EmbeddedLocator {
    fn uri(&self) -> Result<String, LocatorError> {
        self.materialize()?;

        let encoded = self.encoded.borrow();
        let data = encoded.as_deref().unwrap_or_default();

        Ok(format!("data:{};base64,{}", self.mime_type, data))
    }
}

fn check_file_size(path: &Path) -> Result<(), LocatorError> {
    let size = fs::metadata(path)?.len();
    if size > MAX_EMBEDDED_BYTES {
        return Err(LocatorError::ResourceTooLarge {
            size,
            limit: MAX_EMBEDDED_BYTES,
        });
    }
    Ok(())
}

/// Derive a MIME type from a file extension.
///
/// Covers the formats a static site plausibly inlines. A path without an
/// extension is [`LocatorError::MissingMimeType`]; an extension outside the
/// table is [`LocatorError::UnknownExtension`] — pass an explicit MIME type
/// for anything exotic.
fn mime_for_extension(path: &Path) -> Result<String, LocatorError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| LocatorError::MissingMimeType(path.to_path_buf()))?;

    let mime = match ext.to_ascii_lowercase().as_str() {
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "css" => "text/css",
        "gif" => "image/gif",
        "htm" | "html" => "text/html",
        "ico" => "image/x-icon",
        "jpeg" | "jpg" => "image/jpeg",
        "js" => "text/javascript",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        "txt" => "text/plain",
        "webp" => "image/webp",
        "woff2" => "font/woff2",
        _ => return Err(LocatorError::UnknownExtension(ext.to_string())),
    };

    Ok(mime.to_string())
}

/// Convenience alias for the boxed form widgets hold.
pub type SharedLocator = Rc<dyn Locator>;
