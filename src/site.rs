//! The site tree: pages, the page-id registry, and render orchestration.
//!
//! A [`Site`] owns a tree of [`SiteNode`]s (one per page), a registry of
//! every page id ever allocated, and the dialect that renders the tree. The
//! lifecycle is strictly phased:
//!
//! ```text
//! 1. Assemble   add_child / PageBuilder     (tree grows, ids register)
//! 2. Render     Site::render                (intermediate pass, then final pass)
//! 3. Write      Site::write_to_path         (one file per page)
//! ```
//!
//! All `add_child` calls happen before `render`; the tree does not grow
//! during rendering. That is what makes forward references safe: by the time
//! any locator or navbar resolves a page id, every id in the site is
//! registered.
//!
//! ## Page Ids and Filenames
//!
//! Page ids are globally unique across the whole site — not just among
//! siblings — and syntactically restricted (ASCII letters, digits, `-`, `_`,
//! `.`). Each id maps to an output filename through the registry's template
//! (default `{id}.html`). The mapping is a pure function: locators resolve
//! the same filename the write-out step later uses, even for pages whose
//! files do not exist yet.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use thiserror::Error;

use crate::builder::PageBuilder;
use crate::content::PageContent;
use crate::dialect::{Dialect, DialectError};
use crate::locator::{LocatorError, PageLocator};

/// Reserved id of the root page (the homepage).
pub const ROOT_PAGE_ID: &str = "index";

const DEFAULT_FILENAME_TEMPLATE: &str = "{id}.html";

#[derive(Error, Debug)]
pub enum StructureError {
    #[error("page id [{0}] already exists")]
    DuplicatePageId(String),
    #[error("page id [{0}] has an invalid format")]
    InvalidPageId(String),
    #[error("{phase} output for page [{page_id}] not generated yet")]
    UnrenderedOutput {
        page_id: String,
        phase: RenderPhase,
    },
}

/// Which half of the two-phase render an error or output belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Intermediate,
    Final,
}

impl fmt::Display for RenderPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderPhase::Intermediate => f.write_str("intermediate"),
            RenderPhase::Final => f.write_str("final"),
        }
    }
}

/// A dialect failure, wrapped with the node and phase it originated from.
#[derive(Error, Debug)]
#[error("rendering {phase} output for page [{page_id}] failed")]
pub struct RenderError {
    pub page_id: String,
    pub phase: RenderPhase,
    #[source]
    pub source: DialectError,
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The set of all page ids ever allocated, plus the id→filename rule.
///
/// Grows monotonically — there is no node deletion, so ids are never
/// removed. Owned by the [`Site`] and shared (single-threaded) with nodes
/// and page locators, which only query it; registration happens exclusively
/// through [`SiteNode::add_child`].
#[derive(Debug)]
pub struct PageRegistry {
    ids: BTreeSet<String>,
    filename_template: String,
}

/// Shared handle to a site's registry.
pub type SharedRegistry = Rc<RefCell<PageRegistry>>;

impl PageRegistry {
    fn new() -> Self {
        // The root id is fixed and always present.
        let mut ids = BTreeSet::new();
        ids.insert(ROOT_PAGE_ID.to_string());

        Self {
            ids,
            filename_template: DEFAULT_FILENAME_TEMPLATE.to_string(),
        }
    }

    /// Validate and register a new page id.
    ///
    /// Validation precedes mutation: on error the registry is unchanged.
    pub(crate) fn register(&mut self, page_id: &str) -> Result<(), StructureError> {
        validate_page_id(page_id)?;

        if self.ids.contains(page_id) {
            return Err(StructureError::DuplicatePageId(page_id.to_string()));
        }

        self.ids.insert(page_id.to_string());
        Ok(())
    }

    pub fn contains(&self, page_id: &str) -> bool {
        self.ids.contains(page_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Output filename for a page id, per the template. Deterministic — the
    /// same id always yields the same filename, registered or not.
    pub fn filename_for(&self, page_id: &str) -> String {
        self.filename_template.replace("{id}", page_id)
    }

    /// Site-relative URL for a registered page id.
    ///
    /// Fails with [`LocatorError::BrokenReference`] for ids not (yet)
    /// registered — resolution-time validation, the other half of the
    /// forward-reference contract.
    pub fn url_for(&self, page_id: &str) -> Result<String, LocatorError> {
        if !self.contains(page_id) {
            return Err(LocatorError::BrokenReference(page_id.to_string()));
        }
        Ok(self.filename_for(page_id))
    }

    pub(crate) fn set_filename_template(&mut self, template: impl Into<String>) {
        self.filename_template = template.into();
    }
}

/// Page ids are restricted so they embed cleanly in filenames and URLs.
fn validate_page_id(page_id: &str) -> Result<(), StructureError> {
    let valid = !page_id.is_empty()
        && page_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if !valid {
        return Err(StructureError::InvalidPageId(page_id.to_string()));
    }
    Ok(())
}

/// One page in the site tree: identity, ordered content, ordered children,
/// and the two render outputs.
#[derive(Debug)]
pub struct SiteNode {
    registry: SharedRegistry,
    page_id: String,
    page_title: String,
    content: PageContent,
    children: Vec<SiteNode>,
    intermediate_output: Option<String>,
    final_output: Option<String>,
}

impl SiteNode {
    fn new(registry: SharedRegistry, page_id: impl Into<String>, page_title: impl Into<String>) -> Self {
        Self {
            registry,
            page_id: page_id.into(),
            page_title: page_title.into(),
            content: PageContent::new(),
            children: Vec::new(),
            intermediate_output: None,
            final_output: None,
        }
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    pub(crate) fn content_mut(&mut self) -> &mut PageContent {
        &mut self.content
    }

    /// Child pages, in insertion (= render, = iteration) order.
    pub fn children(&self) -> &[SiteNode] {
        &self.children
    }

    /// Create and append a child page.
    ///
    /// The id is validated and registered site-wide before anything is
    /// mutated: a duplicate anywhere in the site — not just among siblings —
    /// or a syntactically invalid id fails without touching the registry or
    /// the children list.
    pub fn add_child(
        &mut self,
        page_id: impl Into<String>,
        page_title: impl Into<String>,
    ) -> Result<&mut SiteNode, StructureError> {
        let page_id = page_id.into();

        self.registry.borrow_mut().register(&page_id)?;

        let child = SiteNode::new(Rc::clone(&self.registry), page_id, page_title);
        self.children.push(child);

        // Just pushed, so the list is non-empty.
        Ok(self.children.last_mut().expect("children is non-empty"))
    }

    /// The builder through which all content is appended to this page.
    pub fn builder(&mut self) -> PageBuilder<'_> {
        PageBuilder::new(self)
    }

    /// Resolve a page id to its site-relative URL.
    ///
    /// For dialects rendering navbar items; same contract as
    /// [`PageRegistry::url_for`].
    pub fn page_url(&self, page_id: &str) -> Result<String, LocatorError> {
        self.registry.borrow().url_for(page_id)
    }

    /// The intermediate output produced by the dialect's first phase.
    pub fn intermediate_output(&self) -> Result<&str, StructureError> {
        self.intermediate_output
            .as_deref()
            .ok_or_else(|| StructureError::UnrenderedOutput {
                page_id: self.page_id.clone(),
                phase: RenderPhase::Intermediate,
            })
    }

    pub fn set_intermediate_output(&mut self, output: impl Into<String>) {
        self.intermediate_output = Some(output.into());
    }

    /// The final output produced by the dialect's second phase.
    pub fn final_output(&self) -> Result<&str, StructureError> {
        self.final_output
            .as_deref()
            .ok_or_else(|| StructureError::UnrenderedOutput {
                page_id: self.page_id.clone(),
                phase: RenderPhase::Final,
            })
    }

    pub fn set_final_output(&mut self, output: impl Into<String>) {
        self.final_output = Some(output.into());
    }
}

/// The whole-tree owner: root node, page-id registry, and the dialect.
///
/// One dialect per site, fixed at construction. A site is built once,
/// rendered once, written once, and discarded.
pub struct Site {
    registry: SharedRegistry,
    dialect: Box<dyn Dialect>,
    root: SiteNode,
}

impl Site {
    /// Create a site whose root page has the reserved id
    /// [`ROOT_PAGE_ID`] and the given display title.
    pub fn new(site_title: impl Into<String>, dialect: Box<dyn Dialect>) -> Self {
        let registry: SharedRegistry = Rc::new(RefCell::new(PageRegistry::new()));
        let root = SiteNode::new(Rc::clone(&registry), ROOT_PAGE_ID, site_title);

        Self {
            registry,
            dialect,
            root,
        }
    }

    pub fn root(&self) -> &SiteNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut SiteNode {
        &mut self.root
    }

    /// Override the id→filename rule. `{id}` is replaced by the page id;
    /// the default is `{id}.html`.
    ///
    /// Set this before constructing page locators' URIs — the rule is part
    /// of what they resolve to.
    pub fn set_filename_template(&mut self, template: impl Into<String>) {
        self.registry
            .borrow_mut()
            .set_filename_template(template);
    }

    /// Output filename for a page id, per the current template.
    pub fn filename_for(&self, page_id: &str) -> String {
        self.registry.borrow().filename_for(page_id)
    }

    /// A locator for a page's eventual output location. May be constructed
    /// before the page is added; resolution validates.
    pub fn page_locator(&self, page_id: impl Into<String>) -> PageLocator {
        PageLocator::new(Rc::clone(&self.registry), page_id)
    }

    /// Render the whole tree, two-phase.
    ///
    /// Phase 1 walks the tree depth-first producing every node's
    /// intermediate output; phase 2 walks again producing final output. The
    /// intermediate pass completes for the *whole tree* before any final
    /// pass begins, so a page's final output may depend on whole-site facts
    /// (every id registered, every intermediate buffer present) but only on
    /// its own intermediate buffer.
    ///
    /// Any dialect failure aborts the render; there is no partial or
    /// resumable render state.
    pub fn render(&mut self) -> Result<(), RenderError> {
        render_pass(self.dialect.as_ref(), &mut self.root, RenderPhase::Intermediate)?;
        render_pass(self.dialect.as_ref(), &mut self.root, RenderPhase::Final)
    }

    /// Render and write the site: one file per page, named by the registry's
    /// filename rule, all in `output_dir` (created if absent).
    pub fn write_to_path(&mut self, output_dir: &Path) -> Result<(), WriteError> {
        self.render()?;

        fs::create_dir_all(output_dir)?;
        write_node(&self.root, &self.registry.borrow(), output_dir)
    }
}

/// One depth-first pass over the tree, calling the dialect per node.
fn render_pass(
    dialect: &dyn Dialect,
    node: &mut SiteNode,
    phase: RenderPhase,
) -> Result<(), RenderError> {
    let result = match phase {
        RenderPhase::Intermediate => dialect.render_intermediate(node),
        RenderPhase::Final => dialect.render_html(node),
    };

    result.map_err(|source| RenderError {
        page_id: node.page_id.clone(),
        phase,
        source,
    })?;

    for child in &mut node.children {
        render_pass(dialect, child, phase)?;
    }

    Ok(())
}

fn write_node(node: &SiteNode, registry: &PageRegistry, output_dir: &Path) -> Result<(), WriteError> {
    let filename = registry.filename_for(&node.page_id);
    fs::write(output_dir.join(filename), node.final_output()?)?;

    for child in &node.children {
        write_node(child, registry, output_dir)?;
    }

    Ok(())
}
