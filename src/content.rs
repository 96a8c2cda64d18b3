//! The page content model: an ordered list of statements.
//!
//! A statement records one content action on a page — "an image goes here",
//! "a navbar goes here" — as a tagged value carrying its widget payload.
//! Statements decouple what exists on a page from how it is rendered: the
//! builder appends them during assembly, the dialect consumes them at render
//! time.
//!
//! Order is significant. Statements render in exactly the order they were
//! appended; the list is never reordered and nothing is ever removed.

use std::fmt;

use crate::widget::{HeadingWidget, ImageWidget, LinkWidget, NavbarWidget};

/// One recorded content action, tagged with its widget kind.
///
/// A closed set: dialects match exhaustively, and the compiler — not a
/// runtime lookup — guarantees no kind goes unhandled by a dialect that
/// intends to handle them all.
#[derive(Debug, Clone)]
pub enum Statement {
    Heading(HeadingWidget),
    Image(ImageWidget),
    Link(LinkWidget),
    HorizontalNavbar(NavbarWidget),
    VerticalNavbar(NavbarWidget),
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Heading(_) => StatementKind::Heading,
            Statement::Image(_) => StatementKind::Image,
            Statement::Link(_) => StatementKind::Link,
            Statement::HorizontalNavbar(_) => StatementKind::HorizontalNavbar,
            Statement::VerticalNavbar(_) => StatementKind::VerticalNavbar,
        }
    }
}

/// Statement kind tag, used for diagnostics (e.g. a dialect reporting a
/// kind it does not support).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Heading,
    Image,
    Link,
    HorizontalNavbar,
    VerticalNavbar,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatementKind::Heading => "heading",
            StatementKind::Image => "image",
            StatementKind::Link => "link",
            StatementKind::HorizontalNavbar => "horizontal navbar",
            StatementKind::VerticalNavbar => "vertical navbar",
        };
        f.write_str(name)
    }
}

/// All content for one page, in append order.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    statements: Vec<Statement>,
}

impl PageContent {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a statement. Append-only: order is preserved verbatim into
    /// rendered output.
    pub(crate) fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::LocalLocator;
    use std::rc::Rc;

    #[test]
    fn push_preserves_order_and_payloads() {
        let mut content = PageContent::new();
        content.push(Statement::Heading(HeadingWidget::new(1, "First").unwrap()));
        content.push(Statement::Image(ImageWidget::new(
            "alt",
            Rc::new(LocalLocator::new("p")),
        )));
        content.push(Statement::Heading(HeadingWidget::new(2, "Second").unwrap()));

        assert_eq!(content.len(), 3);

        let kinds: Vec<StatementKind> = content.statements().iter().map(Statement::kind).collect();
        assert_eq!(
            kinds,
            [
                StatementKind::Heading,
                StatementKind::Image,
                StatementKind::Heading
            ]
        );

        let Statement::Heading(first) = &content.statements()[0] else {
            panic!("expected a heading first");
        };
        assert_eq!(first.text(), "First");

        let Statement::Heading(last) = &content.statements()[2] else {
            panic!("expected a heading last");
        };
        assert_eq!(last.level(), 2);
    }

    #[test]
    fn kind_names_for_diagnostics() {
        assert_eq!(StatementKind::Image.to_string(), "image");
        assert_eq!(StatementKind::VerticalNavbar.to_string(), "vertical navbar");
    }
}
