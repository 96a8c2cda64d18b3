//! The page builder — the sole writer of a page's content.
//!
//! Application code never pushes [`Statement`]s directly; it goes through a
//! [`PageBuilder`] obtained from [`SiteNode::builder`]. One method per widget
//! kind, each producing exactly one statement — except composite helpers
//! like [`add_vertical_navbar`], which expand into a fixed sequence.
//!
//! Appending never fails. The only fallible step is widget construction, and
//! any widget a composite helper constructs itself is built *before* any
//! statement is appended — a failed call leaves the page untouched.
//!
//! [`add_vertical_navbar`]: PageBuilder::add_vertical_navbar
//! [`SiteNode::builder`]: crate::site::SiteNode::builder

use crate::content::Statement;
use crate::site::SiteNode;
use crate::widget::{HeadingWidget, ImageWidget, LinkWidget, NavbarWidget, WidgetError};

/// Appends statements to one page, in call order.
pub struct PageBuilder<'a> {
    node: &'a mut SiteNode,
}

impl<'a> PageBuilder<'a> {
    pub(crate) fn new(node: &'a mut SiteNode) -> Self {
        Self { node }
    }

    /// Append a heading.
    pub fn add_heading(&mut self, heading: HeadingWidget) {
        self.node.content_mut().push(Statement::Heading(heading));
    }

    /// Append one large content image at the next position in the page.
    pub fn add_content_image(&mut self, image: ImageWidget) {
        self.node.content_mut().push(Statement::Image(image));
    }

    /// Append an inline link.
    pub fn add_link(&mut self, link: LinkWidget) {
        self.node.content_mut().push(Statement::Link(link));
    }

    /// Append a horizontal navbar.
    pub fn add_horizontal_navbar(&mut self, navbar: NavbarWidget) {
        self.node
            .content_mut()
            .push(Statement::HorizontalNavbar(navbar));
    }

    /// Append a captioned vertical navbar: a level-1 heading statement
    /// followed by the navbar statement.
    ///
    /// The heading is constructed before either statement is appended, so a
    /// failure here never leaves a caption without its navbar (or vice
    /// versa).
    pub fn add_vertical_navbar(
        &mut self,
        navbar: NavbarWidget,
        caption: &str,
    ) -> Result<(), WidgetError> {
        let heading = HeadingWidget::new(1, caption)?;

        self.add_heading(heading);
        self.node
            .content_mut()
            .push(Statement::VerticalNavbar(navbar));

        Ok(())
    }
}
