//! # Sitewright
//!
//! A programmatic static site builder. Your code is the data source: you
//! assemble a tree of pages, append typed content statements (headings,
//! images, links, navbars) to each page through a builder, and a pluggable
//! *dialect* turns the tree into publishable HTML.
//!
//! # Architecture: Two-Phase Rendering
//!
//! Every build runs the same pipeline over an in-memory page tree:
//!
//! ```text
//! 1. Assemble   Site/SiteNode/PageBuilder  →  ordered statements per page
//! 2. Intermediate  dialect walks each page  →  textual intermediate buffer
//! 3. Final         dialect per page         →  final HTML output
//! 4. Write         page id → filename       →  one file per page
//! ```
//!
//! The intermediate pass completes for the *whole tree* before any final
//! pass begins. That ordering is what makes cross-page references safe: a
//! navbar on the root page can point at a grandchild added last, because all
//! page ids are registered during assembly and resolved no earlier than the
//! render.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Page tree (`Site`, `SiteNode`), page-id registry, render orchestration, write-out |
//! | [`content`] | Ordered statement list — what exists on a page, decoupled from how it renders |
//! | [`builder`] | `PageBuilder` — the only way statements are appended to a page |
//! | [`widget`] | Immutable content descriptions: heading, image, link, navbar |
//! | [`locator`] | Resource URIs: local paths, cross-page references, embedded base64 data |
//! | [`dialect`] | The `Dialect` trait — the rendering strategy seam |
//! | [`markdown`] | Bundled dialect: statements → markdown → HTML |
//!
//! # Design Decisions
//!
//! ## Statements Over Templates
//!
//! A page is an append-only list of [`content::Statement`] values, a closed
//! enum over widget kinds. There is no template language: "what content
//! exists" is plain data, and every rendering decision lives in the dialect.
//! Exhaustive matching means a dialect that handles every statement kind is
//! checked by the compiler, and one that doesn't reports
//! [`dialect::DialectError::UnsupportedStatement`] instead of silently
//! dropping content.
//!
//! ## Forward References
//!
//! A [`locator::PageLocator`] may be constructed for a page that does not
//! exist yet; it is only checked when its URI is requested, which happens at
//! render time — after the whole tree is assembled. Pointing at an id that
//! never got registered is a [`locator::LocatorError::BrokenReference`],
//! and it fails the whole build: partial sites are not valid output.
//!
//! ## Maud Over Template Engines
//!
//! The bundled markdown dialect converts its intermediate buffer with
//! [pulldown-cmark](https://docs.rs/pulldown-cmark) and wraps the result in
//! a [Maud](https://maud.lambda.xyz/) page shell. Compile-time checked HTML,
//! auto-escaped interpolation, no template files to ship.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::rc::Rc;
//!
//! use sitewright::locator::LocalLocator;
//! use sitewright::markdown::MarkdownDialect;
//! use sitewright::site::Site;
//! use sitewright::widget::{HeadingWidget, ImageWidget};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut site = Site::new("My Site", Box::new(MarkdownDialect::new()));
//!
//! let image = ImageWidget::new("sunrise", Rc::new(LocalLocator::new("assets/sunrise.jpg")));
//! site.root_mut().builder().add_content_image(image);
//!
//! let child = site.root_mut().add_child("about", "About")?;
//! child.builder().add_heading(HeadingWidget::new(2, "Who am I")?);
//!
//! site.write_to_path(Path::new("dist"))?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod content;
pub mod dialect;
pub mod locator;
pub mod markdown;
pub mod site;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_helpers;
