//! The dialect contract — the rendering strategy seam.
//!
//! A dialect turns a page's ordered statements into an intermediate textual
//! form, and that intermediate form into final publishable output. The core
//! never formats content itself; it only guarantees ordering:
//!
//! - A node's content is fully populated and immutable before either method
//!   is called.
//! - [`render_intermediate`] runs before [`render_html`] for every node, and
//!   the intermediate pass completes for the whole tree before any final
//!   pass begins.
//! - Dialects render exactly the node they are handed. The site walks the
//!   tree; recursing into `node.children()` is a bug.
//!
//! [`render_intermediate`]: Dialect::render_intermediate
//! [`render_html`]: Dialect::render_html

use thiserror::Error;

use crate::content::StatementKind;
use crate::locator::LocatorError;
use crate::site::{SiteNode, StructureError};

#[derive(Error, Debug)]
pub enum DialectError {
    /// The dialect does not implement this statement kind.
    #[error("dialect does not support {0} statements")]
    UnsupportedStatement(StatementKind),
    /// A line in the intermediate buffer did not match the dialect's own
    /// intermediate format.
    #[error("intermediate line not valid: [{0}]")]
    InvalidIntermediate(String),
    #[error(transparent)]
    Locator(#[from] LocatorError),
    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// High-level, dialect-specific translation operations.
pub trait Dialect {
    /// Produce the node's intermediate output from its title and statements,
    /// storing it with [`SiteNode::set_intermediate_output`].
    fn render_intermediate(&self, node: &mut SiteNode) -> Result<(), DialectError>;

    /// Produce the node's final output from its intermediate output, storing
    /// it with [`SiteNode::set_final_output`].
    fn render_html(&self, node: &mut SiteNode) -> Result<(), DialectError>;
}
